// SPDX-License-Identifier: MPL-2.0
//! Gallery card: thumbnail, hover "View" affordance and caption.

use super::component::Message;
use crate::config::{CARD_ENTRANCE_OFFSET, CARD_STAGGER, CARD_TRANSITION};
use crate::domain::gallery::ImageDescriptor;
use crate::i18n::fluent::I18n;
use crate::media::LoadedImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, hover, image, text, Space};
use iced::{Color, ContentFit, Element, Length, Padding, Theme};
use std::time::Duration;

/// Load state of a card image.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    #[default]
    Pending,
    Ready(LoadedImage),
    /// Missing or undecodable file; the card shows a placeholder.
    Failed,
}

/// One card of the grid.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub descriptor: ImageDescriptor,
    /// Location relative to the gallery base, e.g. `images/a.jpg`.
    pub path: String,
    pub thumbnail: Thumbnail,
}

impl Card {
    pub fn new(index: usize, descriptor: ImageDescriptor, images_dir: &str) -> Self {
        let path = descriptor.image_path(images_dir);
        Self {
            index,
            descriptor,
            path,
            thumbnail: Thumbnail::Pending,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        self.descriptor.alt_text()
    }

    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        match &self.thumbnail {
            Thumbnail::Ready(image) => Some(image),
            Thumbnail::Pending | Thumbnail::Failed => None,
        }
    }
}

/// Entrance progress of card `index`, from 0.0 (hidden, offset) to 1.0
/// (visible, in place).
///
/// `elapsed` is the time since the grid was rendered; `None` means the
/// animation is disabled and every card is shown immediately.
#[must_use]
pub fn entrance_progress(elapsed: Option<Duration>, index: usize) -> f32 {
    let Some(elapsed) = elapsed else {
        return 1.0;
    };
    let delay = CARD_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
    let Some(running) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    let t = (running.as_secs_f32() / CARD_TRANSITION.as_secs_f32()).min(1.0);
    ease_in_out(t)
}

/// Time after which the last of `count` cards has finished its entrance.
#[must_use]
pub fn entrance_duration(count: usize) -> Duration {
    let last = u32::try_from(count.saturating_sub(1)).unwrap_or(u32::MAX);
    CARD_STAGGER.saturating_mul(last) + CARD_TRANSITION
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

pub fn view<'a>(card: &'a Card, progress: f32, i18n: &I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &card.thumbnail {
        Thumbnail::Ready(loaded) => image(loaded.thumbnail.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .opacity(progress)
            .into(),
        Thumbnail::Pending => placeholder(Space::new().into(), progress),
        Thumbnail::Failed => placeholder(
            text(i18n.tr("card-image-unavailable"))
                .size(typography::CAPTION)
                .into(),
            progress,
        ),
    };

    let view_affordance = container(text(i18n.tr("card-view")).size(typography::BODY))
        .center(Length::Fill)
        .style(styles::container::card_hover);

    let caption = text(card.caption())
        .size(typography::CAPTION)
        .style(move |theme: &Theme| text::Style {
            color: Some(theme.palette().text.scale_alpha(progress)),
        });

    let content = column![hover(picture, view_affordance), caption].spacing(spacing::XS);

    let card_button = button(content)
        .padding(spacing::XS)
        .width(Length::Fill)
        .on_press(Message::CardPressed(card.index))
        .style(move |theme: &Theme, status| fade(styles::button::card(theme, status), progress));

    let offset = (1.0 - progress) * CARD_ENTRANCE_OFFSET;
    container(card_button)
        .padding(Padding {
            top: offset,
            bottom: CARD_ENTRANCE_OFFSET - offset,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .into()
}

/// Grey box standing in for a pending or failed image, faded in with the
/// rest of the card.
fn placeholder<'a>(content: Element<'a, Message>, progress: f32) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .style(move |theme: &Theme| fade_container(styles::container::placeholder(theme), progress))
        .into()
}

fn fade_container(style: container::Style, alpha: f32) -> container::Style {
    container::Style {
        background: style.background.map(|background| background.scale_alpha(alpha)),
        text_color: style.text_color.map(|color| color.scale_alpha(alpha)),
        border: iced::Border {
            color: style.border.color.scale_alpha(alpha),
            ..style.border
        },
        ..style
    }
}

fn fade(style: button::Style, alpha: f32) -> button::Style {
    button::Style {
        background: style.background.map(|background| background.scale_alpha(alpha)),
        text_color: style.text_color.scale_alpha(alpha),
        border: iced::Border {
            color: style.border.color.scale_alpha(alpha),
            ..style.border
        },
        shadow: iced::Shadow {
            color: Color {
                a: style.shadow.color.a * alpha,
                ..style.shadow.color
            },
            ..style.shadow
        },
        ..style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn disabled_animation_shows_cards_at_once() {
        assert_eq!(entrance_progress(None, 0), 1.0);
        assert_eq!(entrance_progress(None, 42), 1.0);
    }

    #[test]
    fn card_waits_for_its_stagger_delay() {
        assert_eq!(entrance_progress(Some(Duration::ZERO), 0), 0.0);
        assert_eq!(entrance_progress(Some(Duration::from_millis(299)), 3), 0.0);
        assert_eq!(entrance_progress(Some(Duration::from_millis(300)), 3), 0.0);
    }

    #[test]
    fn card_is_fully_visible_after_transition() {
        assert_eq!(entrance_progress(Some(Duration::from_millis(600)), 0), 1.0);
        assert_eq!(entrance_progress(Some(Duration::from_millis(900)), 3), 1.0);
        assert_eq!(entrance_progress(Some(Duration::from_secs(60)), 3), 1.0);
    }

    #[test]
    fn progress_is_eased_and_monotonic() {
        let half = entrance_progress(Some(Duration::from_millis(300)), 0);
        assert!((half - 0.5).abs() < EPSILON);

        let mut last = 0.0;
        for ms in (0..=600).step_by(50) {
            let p = entrance_progress(Some(Duration::from_millis(ms)), 0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn entrance_duration_covers_last_card() {
        assert_eq!(entrance_duration(0), Duration::from_millis(600));
        assert_eq!(entrance_duration(1), Duration::from_millis(600));
        assert_eq!(entrance_duration(5), Duration::from_millis(1000));
    }

    #[test]
    fn card_resolves_path_under_images_dir() {
        let card = Card::new(1, ImageDescriptor::new("b.jpg", None), "images");
        assert_eq!(card.path, "images/b.jpg");
        assert_eq!(card.caption(), "Gallery image");
        assert!(card.image().is_none());
    }

    #[test]
    fn fade_scales_background_alpha() {
        let style = fade(styles::button::card(&Theme::Light, button::Status::Active), 0.5);
        match style.background {
            Some(iced::Background::Color(color)) => assert!((color.a - 0.5).abs() < EPSILON),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn placeholder_fades_with_card() {
        let opaque = styles::container::placeholder(&Theme::Dark);
        let hidden = fade_container(opaque.clone(), 0.0);
        let half = fade_container(opaque.clone(), 0.5);

        match (hidden.background, half.background) {
            (Some(iced::Background::Color(hidden)), Some(iced::Background::Color(half))) => {
                assert_eq!(hidden.a, 0.0);
                assert!((half.a - 0.5).abs() < EPSILON);
            }
            other => panic!("unexpected backgrounds {other:?}"),
        }
        assert_eq!(hidden.text_color.map(|color| color.a), Some(0.0));
        assert_eq!(fade_container(opaque.clone(), 1.0).text_color, opaque.text_color);
    }
}
