// SPDX-License-Identifier: MPL-2.0
//! Fixed-capacity ring buffer for lifecycle events.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Ring buffer keeping the most recent `capacity` items, oldest first.
///
/// ```
/// use vr_notifications::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer = CircularBuffer::new(BufferCapacity::default());
/// buffer.push("enqueued");
/// buffer.push("shown");
/// assert_eq!(buffer.latest(), Some(&"shown"));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Unvalidated capacity, for tests that need tiny buffers. Zero becomes one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `item`, dropping the oldest entry when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
            self.evicted += 1;
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items dropped to make room since creation.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        for i in 1..=3 {
            buffer.push(i);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(buffer.latest(), Some(&3));
    }

    #[test]
    fn overflow_drops_oldest_and_counts_evictions() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.evicted(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push('a');
        buffer.push('b');
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.latest(), Some(&'b'));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(5);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn new_uses_validated_capacity() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(1));
        assert_eq!(
            buffer.capacity(),
            crate::domain::diagnostics::buffer_capacity_bounds::MIN
        );
    }
}
