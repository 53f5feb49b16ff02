//! Frame scheduling for settle animations.
//!
//! A picker never runs its own clock. It asks a [`FrameScheduler`] for one
//! tick at a time, and the host calls back into
//! [`WheelPicker::on_frame`](crate::WheelPicker::on_frame) with the tick id
//! and the frame timestamp. Cancelling a tick is synchronous: the picker
//! forgets the id immediately and ignores it if it is delivered anyway.

use std::collections::VecDeque;

/// Identifier of a requested frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

/// Source of frame ticks.
pub trait FrameScheduler {
    /// Ask for one tick on the next display refresh.
    fn request_tick(&mut self) -> TickId;

    /// Withdraw a tick that has not been delivered yet.
    fn cancel_tick(&mut self, id: TickId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_tick(&mut self) -> TickId {
        (**self).request_tick()
    }

    fn cancel_tick(&mut self, id: TickId) {
        (**self).cancel_tick(id)
    }
}

/// Deterministic scheduler for tests and headless replay.
///
/// Ticks are queued in request order and handed out by
/// [`take_pending`](Self::take_pending).
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<TickId>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending tick.
    pub fn take_pending(&mut self) -> Option<TickId> {
        self.pending.pop_front()
    }

    /// Ticks requested but not yet taken or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Check if any tick is waiting.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Total ticks ever requested.
    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    /// Total ticks cancelled before delivery.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_tick(&mut self) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending.push_back(id);
        id
    }

    fn cancel_tick(&mut self, id: TickId) {
        let before = self.pending.len();
        self.pending.retain(|&pending| pending != id);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
