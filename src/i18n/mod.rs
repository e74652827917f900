// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Plural-aware counts (`1 image` / `2 images`)
//! - Fallback to `en-US` when a key is missing from the active locale

pub mod fluent;
