// SPDX-License-Identifier: MPL-2.0
//! Collector owning the lifecycle event history.

use std::collections::BTreeMap;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Bounded store of recent lifecycle events.
///
/// Recording is synchronous; the manager calls [`record`](Self::record)
/// directly from its tick.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    totals: BTreeMap<&'static str, u64>,
}

/// Counts per event kind since the collector was created.
///
/// Counts include events already evicted from the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsSummary {
    pub counts: BTreeMap<&'static str, u64>,
    pub retained: usize,
    pub evicted: u64,
}

impl DiagnosticsSummary {
    #[must_use]
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            totals: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, kind: DiagnosticEventKind, sim_time: f32) {
        log::trace!("[diagnostics] {} at {:.3}s", kind.label(), sim_time);
        *self.totals.entry(kind.label()).or_insert(0) += 1;
        self.buffer.push(DiagnosticEvent::new(kind, sim_time));
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> DiagnosticsSummary {
        DiagnosticsSummary {
            counts: self.totals.clone(),
            retained: self.buffer.len(),
            evicted: self.buffer.evicted(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.totals.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
