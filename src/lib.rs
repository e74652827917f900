// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery built with the Iced GUI framework.
//!
//! It reads an `images.json` manifest from a URL or a local directory, shows
//! the images as a grid of cards and opens any of them in a lightbox with
//! keyboard navigation. Strings are localized with Fluent and preferences
//! live in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
