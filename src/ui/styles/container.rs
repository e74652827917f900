// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the error and empty-state messages.
///
/// Derived from the active theme background so it reads in both modes.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: Some(extended.background.weak.text),
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Error panel: the regular panel with a red outline.
pub fn error_panel(theme: &Theme) -> container::Style {
    let base = panel(theme);
    container::Style {
        border: Border {
            color: palette::ERROR_500,
            ..base.border
        },
        ..base
    }
}

/// Header bar holding the title, stats and refresh button.
pub fn header(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: Some(extended.background.weak.text),
        ..Default::default()
    }
}

/// Darkened backdrop covering the window while the lightbox is open.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// "View" affordance shown over a hovered card image.
pub fn card_hover(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder drawn while a card image loads or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        text_color: Some(extended.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Caption strip under the lightbox image.
pub fn lightbox_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_panel_keeps_panel_background() {
        let theme = Theme::Dark;
        assert_eq!(error_panel(&theme).background, panel(&theme).background);
        assert_eq!(error_panel(&theme).border.color, palette::ERROR_500);
    }

    #[test]
    fn backdrop_is_mostly_opaque_black() {
        match backdrop(&Theme::Light).background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a >= opacity::BACKDROP);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }
}
