//! Frame scheduler backed by egui repaints.

use egui::Context;
use wheelpick_core::{FrameScheduler, TickId};

/// Requests a repaint for every tick and hands the tick back on the next
/// frame through [`take_pending`](Self::take_pending).
///
/// A picker waits on at most one tick, so only the latest request is kept.
#[derive(Debug, Clone)]
pub struct EguiScheduler {
    ctx: Context,
    next_id: u64,
    pending: Option<TickId>,
}

impl EguiScheduler {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }

    /// Take the tick requested since the last frame, if any.
    pub fn take_pending(&mut self) -> Option<TickId> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for EguiScheduler {
    fn request_tick(&mut self) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.pending = Some(id);
        self.ctx.request_repaint();
        id
    }

    fn cancel_tick(&mut self, id: TickId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_wins() {
        let mut scheduler = EguiScheduler::new(Context::default());
        let first = scheduler.request_tick();
        let second = scheduler.request_tick();
        assert_ne!(first, second);

        scheduler.cancel_tick(first);
        assert_eq!(scheduler.take_pending(), Some(second));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_cancel_pending() {
        let mut scheduler = EguiScheduler::new(Context::default());
        let tick = scheduler.request_tick();
        scheduler.cancel_tick(tick);
        assert_eq!(scheduler.take_pending(), None);
    }
}
