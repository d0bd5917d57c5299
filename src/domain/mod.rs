// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no host or engine dependencies.
//!
//! # Modules
//!
//! - [`color`]: RGBA [`Color`](color::Color) used by notification styles
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`geometry`]: [`Vec3`](geometry::Vec3), [`Pose`](geometry::Pose) and the
//!   interpolation helpers the slot animation and follow behavior are built on

pub mod color;
pub mod diagnostics;
pub mod geometry;

pub use color::Color;
pub use geometry::{Pose, Vec3};
