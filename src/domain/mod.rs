// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ImageDescriptor`](gallery::ImageDescriptor),
//!   [`Lightbox`](gallery::Lightbox), [`LoadError`](gallery::LoadError))

pub mod gallery;
