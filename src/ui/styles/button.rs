// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action (refresh, retry).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round translucent buttons drawn over the lightbox.
///
/// A disabled button keeps its place but is drawn at [`opacity::DISABLED`].
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_alpha) = match status {
            button::Status::Hovered => (alpha_hover, opacity::OPAQUE),
            button::Status::Pressed => (opacity::BACKDROP, opacity::OPAQUE),
            button::Status::Disabled => (alpha_normal * opacity::DISABLED, opacity::DISABLED),
            button::Status::Active => (alpha_normal, opacity::OPAQUE),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: Color {
                a: text_alpha,
                ..WHITE
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Gallery card: a raised surface that lifts on hover.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let (card_shadow, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (shadow::CARD_HOVER, extended.primary.base.color)
        }
        button::Status::Active | button::Status::Disabled => {
            (shadow::CARD, extended.background.strong.color)
        }
    };

    button::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: extended.background.weak.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}
