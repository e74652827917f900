// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The lightbox is either closed or open on one image index. Previous/next
//! navigation stops at the ends of the list (no wrap-around), and the
//! navigation buttons mirror those boundaries.

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Previous,
    Next,
    Close,
}

/// Enabled state of the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationButtons {
    pub previous: bool,
    pub next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl Lightbox {
    /// Opens the lightbox on `index`.
    pub fn open(&mut self, index: usize) {
        *self = Lightbox::Open { index };
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Index of the displayed image, `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// Moves to the previous image. Returns `false` at the first image or
    /// while closed.
    pub fn show_previous(&mut self) -> bool {
        match self {
            Lightbox::Open { index } if *index > 0 => {
                *index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Moves to the next image in a list of `len` images. Returns `false` at
    /// the last image or while closed.
    pub fn show_next(&mut self, len: usize) -> bool {
        match self {
            Lightbox::Open { index } if *index + 1 < len => {
                *index += 1;
                true
            }
            _ => false,
        }
    }

    /// Applies a key press. Keys are ignored while closed.
    ///
    /// Returns `true` when the state changed.
    pub fn handle_key(&mut self, key: LightboxKey, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Previous => self.show_previous(),
            LightboxKey::Next => self.show_next(len),
            LightboxKey::Close => {
                self.close();
                true
            }
        }
    }

    /// Button state for a list of `len` images. Both disabled while closed.
    #[must_use]
    pub fn navigation(&self, len: usize) -> NavigationButtons {
        match self {
            Lightbox::Open { index } => NavigationButtons {
                previous: *index > 0,
                next: *index + 1 < len,
            },
            Lightbox::Closed => NavigationButtons::default(),
        }
    }

    /// Keeps the index valid after the image list was replaced.
    ///
    /// `position_of_current` is the index of the previously shown image in
    /// the new list, if it is still present. Otherwise the index is clamped to
    /// the new list; an empty list closes the lightbox.
    pub fn reconcile(&mut self, position_of_current: Option<usize>, len: usize) {
        let Lightbox::Open { index } = self else {
            return;
        };
        if len == 0 {
            self.close();
            return;
        }
        *index = position_of_current.unwrap_or(*index).min(len - 1);
    }
}
