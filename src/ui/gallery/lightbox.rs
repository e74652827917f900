// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the selected image over a dark backdrop, with close and
//! previous/next controls.
//!
//! Pressing the backdrop closes the lightbox. The image, its caption and the
//! buttons are opaque so presses on them never reach the backdrop, including
//! presses on a disabled navigation button.

use super::card::{Card, Thumbnail};
use super::component::Message;
use crate::domain::gallery::NavigationButtons;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, text, tooltip, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

/// Data needed to draw the open lightbox.
pub struct LightboxView<'a> {
    pub card: &'a Card,
    /// 1-based position of the card.
    pub position: usize,
    pub total: usize,
    pub navigation: NavigationButtons,
}

pub fn view<'a>(lightbox: LightboxView<'a>, i18n: &I18n) -> Element<'a, Message> {
    let LightboxView {
        card,
        position,
        total,
        navigation,
    } = lightbox;

    let backdrop = backdrop();

    let picture: Element<'a, Message> = match &card.thumbnail {
        Thumbnail::Ready(loaded) => image(loaded.full.clone())
            .content_fit(ContentFit::Contain)
            .into(),
        Thumbnail::Failed => text(i18n.tr("card-image-unavailable"))
            .size(typography::BODY)
            .into(),
        Thumbnail::Pending => Space::new()
            .width(Length::Fixed(sizing::CARD_MIN_WIDTH))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
    };

    let counter = i18n.tr_with_args(
        "lightbox-position",
        &[
            ("current", position.to_string().as_str()),
            ("total", total.to_string().as_str()),
        ],
    );
    let caption = container(
        column![
            text(card.caption()).size(typography::BODY),
            text(format!("{counter}  ·  {}", card.path)).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::lightbox_caption);

    let stage = container(
        column![opaque(picture), opaque(caption)]
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center),
    )
    .center(Length::Fill)
    .padding(spacing::MD);

    let previous = nav_button(
        "‹",
        i18n.tr("lightbox-previous"),
        navigation.previous.then_some(Message::ShowPrevious),
    );
    let next = nav_button(
        "›",
        i18n.tr("lightbox-next"),
        navigation.next.then_some(Message::ShowNext),
    );
    let close = nav_button("×", i18n.tr("lightbox-close"), Some(Message::CloseLightbox));

    let controls = column![
        row![Space::new().width(Length::Fill), close].padding(spacing::MD),
        row![previous, stage, next]
            .align_y(alignment::Vertical::Center)
            .padding([0.0, spacing::MD])
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(backdrop)
        .push(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Full-size dark layer under the controls; any press on it closes.
fn backdrop<'a>() -> Element<'a, Message> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(BACKDROP_PRESS)
    .into()
}

const BACKDROP_PRESS: Message = Message::CloseLightbox;

/// Round overlay button with a tooltip; `None` leaves it dimmed and inert.
fn nav_button<'a>(glyph: &'a str, label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let control = button(
        container(text(glyph).size(typography::GLYPH)).center(Length::Fixed(sizing::LIGHTBOX_BUTTON)),
    )
    .padding(0)
    .on_press_maybe(on_press)
    .style(styles::button::overlay(
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let hint = container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::lightbox_caption);

    opaque(tooltip(control, hint, tooltip::Position::Bottom))
}
