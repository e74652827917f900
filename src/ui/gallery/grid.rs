// SPDX-License-Identifier: MPL-2.0
//! Responsive card grid.
//!
//! The column count follows the available width, so cards reflow when the
//! window is resized.

use super::card::{self, Card};
use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{responsive, scrollable, Column, Row, Space};
use iced::{Element, Length};

/// Number of columns fitting in `width`, at least one.
#[must_use]
pub fn columns_for(width: f32) -> usize {
    let usable = (width - 2.0 * spacing::LG + spacing::MD).max(0.0);
    // Truncation is intended: partial columns do not count
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = (usable / (sizing::CARD_MIN_WIDTH + spacing::MD)) as usize;
    columns.max(1)
}

/// Scrollable grid of `cards`. `progress(index)` gives each card's entrance
/// progress.
pub fn view<'a, F>(cards: &'a [Card], progress: F, i18n: &'a I18n) -> Element<'a, Message>
where
    F: Fn(usize) -> f32 + 'a,
{
    responsive(move |size| {
        let columns = columns_for(size.width);
        let mut grid = Column::new().spacing(spacing::MD).padding(spacing::LG);

        for chunk in cards.chunks(columns) {
            let mut row = Row::new().spacing(spacing::MD);
            for card in chunk {
                row = row.push(card::view(card, progress(card.index), i18n));
            }
            // Pad the last row so its cards keep the column width
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            grid = grid.push(row);
        }

        scrollable(grid).width(Length::Fill).height(Length::Fill).into()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_window_still_has_one_column() {
        assert_eq!(columns_for(0.0), 1);
        assert_eq!(columns_for(100.0), 1);
    }

    #[test]
    fn columns_grow_with_width() {
        let one = columns_for(sizing::CARD_MIN_WIDTH + 2.0 * spacing::LG);
        let wide = columns_for(1280.0);
        assert_eq!(one, 1);
        assert!(wide > one);
    }

    #[test]
    fn exact_fit_counts_every_column() {
        let width = 3.0 * sizing::CARD_MIN_WIDTH + 2.0 * spacing::MD + 2.0 * spacing::LG;
        assert_eq!(columns_for(width), 3);
    }
}
