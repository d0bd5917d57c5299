// SPDX-License-Identifier: MPL-2.0
//! FIFO queue and the polling loop feeding the display slot.

use std::collections::VecDeque;

use super::notification::Notification;

/// Outcome of one [`NotificationScheduler::poll`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The loop is not running.
    Inactive,
    /// Between checks.
    Waiting,
    /// Checked, but the slot is still busy.
    Busy,
    /// Checked and handed out the queue head.
    Dequeued(Notification),
    /// Checked with an empty queue and an idle slot; the loop has exited.
    Finished,
}

/// Pending notifications plus the run state of the polling loop.
///
/// The loop checks once immediately after starting, then every `interval`
/// seconds. It only ever takes from the head, one notification per check.
#[derive(Debug, Clone)]
pub struct NotificationScheduler {
    queue: VecDeque<Notification>,
    interval: f32,
    until_next_check: f32,
    running: bool,
}

impl NotificationScheduler {
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            interval,
            until_next_check: 0.0,
            running: false,
        }
    }

    /// Appends to the tail. Never blocks, never drops.
    pub fn enqueue(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Starts the polling loop. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.until_next_check = 0.0;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Advances the loop by `dt` and checks the queue if a check is due.
    ///
    /// `slot_idle` must reflect the slot as of the start of this frame.
    pub fn poll(&mut self, dt: f32, slot_idle: bool) -> PollOutcome {
        if !self.running {
            return PollOutcome::Inactive;
        }
        self.until_next_check -= dt;
        if self.until_next_check > 0.0 {
            return PollOutcome::Waiting;
        }
        self.until_next_check = self.interval;

        if !slot_idle {
            return PollOutcome::Busy;
        }
        match self.queue.pop_front() {
            Some(notification) => PollOutcome::Dequeued(notification),
            None => {
                self.running = false;
                PollOutcome::Finished
            }
        }
    }
}
