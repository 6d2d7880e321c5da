//! Elapsed-time counter for an active session.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default spacing between elapsed-time ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Shortest accepted tick spacing; shorter intervals are raised to this.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Run state of an [`ElapsedClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    /// Not started yet.
    Idle,
    /// Counting ticks.
    Running,
    /// Cancelled; never restarts.
    Stopped,
}

/// Counts fixed-interval ticks while a session is active.
///
/// Starts at most once and stops at most once; ticks outside the running
/// window are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedClock {
    ticks: u64,
    interval: Duration,
    state: ClockState,
}

impl ElapsedClock {
    /// Creates an idle clock that counts in steps of `interval`.
    ///
    /// A zero interval cannot be scheduled, so anything below
    /// [`MIN_TICK_INTERVAL`] is raised to it.
    pub fn new(interval: Duration) -> Self {
        if interval < MIN_TICK_INTERVAL {
            warn!(?interval, "Tick interval too short, using minimum");
        }
        Self {
            ticks: 0,
            interval: interval.max(MIN_TICK_INTERVAL),
            state: ClockState::Idle,
        }
    }

    /// Starts counting. Returns false if it was already started or stopped.
    pub fn start(&mut self) -> bool {
        if self.state != ClockState::Idle {
            return false;
        }
        self.state = ClockState::Running;
        true
    }

    /// Stops counting. Returns false unless the clock was running.
    pub fn stop(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.state = ClockState::Stopped;
        true
    }

    /// Records one tick if running.
    pub fn tick(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.ticks = self.ticks.saturating_add(1);
        true
    }

    /// Ticks recorded so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time represented by one tick.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks converted to wall time.
    pub fn elapsed(&self) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(self.ticks).unwrap_or(u32::MAX))
    }

    /// Current run state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// True between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
