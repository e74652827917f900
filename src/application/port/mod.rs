// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the gallery controller remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`source`]: Where the manifest and image bytes come from
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so one adapter can be shared by every task
//! - Fetches return boxed `'static` futures that callers hand to `Task::perform`

pub mod source;

pub use source::{GallerySource, SourceFuture};
