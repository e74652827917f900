// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: image descriptors, the lightbox state machine and the
//! load failure taxonomy.

mod descriptor;
mod error;
mod lightbox;

pub use descriptor::{ImageDescriptor, DEFAULT_ALT, DEFAULT_IMAGES_DIR};
pub use error::LoadError;
pub use lightbox::{Lightbox, LightboxKey, NavigationButtons};
