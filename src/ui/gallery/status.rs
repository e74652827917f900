// SPDX-License-Identifier: MPL-2.0
//! Loading, error and empty-state panels shown in place of the grid.
//!
//! # Usage
//!
//! ```ignore
//! StatusPanel::new(StatusKind::Error)
//!     .title(i18n.tr("gallery-error-title"))
//!     .message(i18n.tr(error.i18n_key()))
//!     .details(error.to_string())
//!     .action(i18n.tr("gallery-retry"), Message::Refresh)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, text, Column};
use iced::{alignment, Element, Length, Theme};

/// Which panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    /// The manifest could not be loaded.
    #[default]
    Error,
    /// The manifest loaded but lists no images.
    Empty,
}

/// Centered message panel with an optional action button.
#[derive(Debug, Clone)]
pub struct StatusPanel<Message> {
    kind: StatusKind,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message> Default for StatusPanel<Message> {
    fn default() -> Self {
        Self {
            kind: StatusKind::default(),
            title: None,
            message: None,
            details: None,
            action: None,
        }
    }
}

impl<Message: Clone + 'static> StatusPanel<Message> {
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Secondary line in a smaller, muted font.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            let is_error = self.kind == StatusKind::Error;
            content = content.push(text(title).size(typography::TITLE_SM).style(
                move |theme: &Theme| text::Style {
                    color: Some(if is_error {
                        palette::ERROR_500
                    } else {
                        theme.palette().text
                    }),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(text(message).size(typography::BODY).center());
        }

        if let Some(details) = self.details {
            content = content.push(text(details).size(typography::CAPTION).center().style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                },
            ));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(text(label).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(message)
                    .style(styles::button::primary),
            );
        }

        let style = match self.kind {
            StatusKind::Error => styles::container::error_panel,
            StatusKind::Empty => styles::container::panel,
        };

        centered(
            container(content)
                .max_width(sizing::PANEL_WIDTH)
                .padding(spacing::LG)
                .style(style)
                .into(),
        )
    }
}

/// Spinner with a label, centered in the body.
pub fn loading<'a, Message: 'a>(rotation: f32, label: String) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element();
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(text(label).size(typography::BODY));
    centered(column.into())
}

fn centered<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .center(Length::Fill)
        .padding(spacing::LG)
        .into()
}
