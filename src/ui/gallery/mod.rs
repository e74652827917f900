// SPDX-License-Identifier: MPL-2.0
//! Image gallery screen: card grid, lightbox and load status.
//!
//! This module follows the "state down, messages up" pattern. [`State`]
//! owns the image list and the lightbox; the view functions in the
//! submodules are pure functions of it.

mod card;
pub mod component;
mod grid;
mod lightbox;
mod status;

pub use card::{entrance_progress, Card, Thumbnail};
pub use component::{auto_refresh, lightbox_key_for, Message, Panels, Phase, Settings, State};
pub use grid::columns_for;

use crate::i18n::fluent::I18n;

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Manifest file name, quoted in the empty-state hint.
    pub manifest_name: &'a str,
}
