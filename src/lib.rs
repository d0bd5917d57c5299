// SPDX-License-Identifier: MPL-2.0
//! `vr_notifications` queues short messages and shows them one at a time on a
//! single slot that floats in front of a tracked viewpoint.
//!
//! The crate is engine-agnostic: the host supplies the viewpoint pose, draws
//! the slot through a few small traits and calls
//! [`NotificationManager::tick`](notifications::NotificationManager::tick)
//! once per frame.

#![doc(html_root_url = "https://docs.rs/vr_notifications/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;

#[cfg(test)]
mod test_utils;
