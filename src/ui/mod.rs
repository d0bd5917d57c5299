// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the default notification styles.
//!
//! Rendering itself belongs to the host; this crate only decides colors.
//!
//! - [`design_tokens`] - Palette and opacity scale

pub mod design_tokens;
