// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a Canvas.
//!
//! The spinner holds no clock: the caller passes the rotation derived from
//! the time the load started, see [`rotation_at`].

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn per second.
const TURN: Duration = Duration::from_secs(1);

const STROKE_WIDTH: f32 = 3.0;

/// Rotation in radians after `elapsed`, wrapped to one turn.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / TURN.as_secs_f32();
    turns.fract() * TAU
}

/// Spinning half-circle over a faint full circle.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Start at twelve o'clock
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_at_zero() {
        assert_eq!(rotation_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn rotation_wraps_every_turn() {
        let quarter = rotation_at(Duration::from_millis(250));
        let later = rotation_at(Duration::from_millis(1250));
        assert!((quarter - TAU / 4.0).abs() < 1e-4);
        assert!((quarter - later).abs() < 1e-3);
    }
}
