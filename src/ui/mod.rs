// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The gallery screen follows the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`gallery`] - Card grid, lightbox and loading/error/empty states
//! - [`widgets`] - Custom Iced widgets (spinner, scroll lock)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod widgets;
