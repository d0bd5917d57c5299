// SPDX-License-Identifier: MPL-2.0
//! Lifecycle diagnostics for the notification slot.
//!
//! Every notable transition (enqueue, show, hold, hide, loop start/stop) is
//! recorded as a timestamped [`DiagnosticEvent`] in a memory-bounded
//! [`CircularBuffer`]. Hosts read the history to debug a stuck queue; tests
//! use it to assert ordering.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEventKind`]: What happened
//! - [`DiagnosticsCollector`]: Owns the buffer and summarizes it

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsSummary};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
