// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the gallery and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives ports by injection and never names an adapter

pub mod port;
