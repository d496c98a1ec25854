//! Cancellable timers driven by the host loop.
//!
//! Nothing here reads a clock. The host reports elapsed milliseconds once per
//! frame and each task decides whether it fires. Both tasks belong to the
//! session and are cancelled together when a round ends.

use crate::types::{COUNTDOWN_INTERVAL_MS, DROP_INTERVAL_MS};

/// Per-frame task that fires at most once per frame.
///
/// Mirrors an animation-frame loop comparing "now" against the last forced
/// drop: when at least `interval_ms` has passed the task fires and its clock
/// restarts from zero, discarding any overshoot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTask {
    interval_ms: u32,
    elapsed_ms: u32,
    cancelled: bool,
}

impl FrameTask {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            cancelled: true,
        }
    }

    /// Advance by one frame. Returns true when the task fires.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.cancelled {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    /// Arm the task with a fresh clock.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.cancelled = false;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.elapsed_ms = 0;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// Fixed-period task that keeps its phase across frames.
///
/// A long frame can make it fire several times; the remainder carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTask {
    interval_ms: u32,
    elapsed_ms: u32,
    cancelled: bool,
}

impl PeriodicTask {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            cancelled: true,
        }
    }

    /// Advance the clock. Returns how many periods completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.cancelled = false;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.elapsed_ms = 0;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// The two timers of a round: automatic drop and countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    pub drop: FrameTask,
    pub countdown: PeriodicTask,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            drop: FrameTask::new(DROP_INTERVAL_MS),
            countdown: PeriodicTask::new(COUNTDOWN_INTERVAL_MS),
        }
    }

    /// Arm both tasks from zero.
    pub fn start(&mut self) {
        self.drop.reset();
        self.countdown.reset();
    }

    /// Cancel both tasks in one step.
    pub fn cancel_all(&mut self) {
        self.drop.cancel();
        self.countdown.cancel();
    }

    /// True while either task is armed.
    pub fn is_active(&self) -> bool {
        !self.drop.is_cancelled() || !self.countdown.is_cancelled()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
