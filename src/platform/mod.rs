//! Platform abstraction layer
//!
//! Handles the browser side of the game:
//! - Per-frame scheduling (requestAnimationFrame)
//! - Input events (click, keydown)
//! - Teardown of listeners and scheduling
//! - Optional host container handshake

#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a run when the host did not pin one
pub fn seed_or(seed: Option<u64>, fallback: impl FnOnce() -> u64) -> u64 {
    seed.unwrap_or_else(fallback)
}

/// Whether the frame loop may keep going, and which frame is queued
#[derive(Debug)]
pub struct FrameSchedule {
    running: bool,
    pending: Option<i32>,
}

impl Default for FrameSchedule {
    fn default() -> Self {
        Self {
            running: true,
            pending: None,
        }
    }
}

impl FrameSchedule {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// A frame was requested with this id
    pub fn scheduled(&mut self, id: i32) {
        if self.running {
            self.pending = Some(id);
        }
    }

    /// Frame callback fired; false means stop without rescheduling
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Halt the loop, handing back the queued frame to cancel
    pub fn stop(&mut self) -> Option<i32> {
        self.running = false;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_runs_until_stopped() {
        let mut schedule = FrameSchedule::default();
        assert!(schedule.is_running());

        schedule.scheduled(4);
        assert_eq!(schedule.pending(), Some(4));
        assert!(schedule.begin_frame());
        assert_eq!(schedule.pending(), None);

        schedule.scheduled(5);
        assert_eq!(schedule.stop(), Some(5));
        assert!(!schedule.is_running());
        assert!(!schedule.begin_frame());
    }

    #[test]
    fn test_stop_twice_cancels_once() {
        let mut schedule = FrameSchedule::default();
        schedule.scheduled(9);
        assert_eq!(schedule.stop(), Some(9));
        assert_eq!(schedule.stop(), None);

        // A late request after teardown is never tracked
        schedule.scheduled(10);
        assert_eq!(schedule.pending(), None);
    }

    #[test]
    fn test_pinned_seed_wins() {
        assert_eq!(seed_or(Some(9), || 1), 9);
        assert_eq!(seed_or(None, || 1), 1);
    }
}
