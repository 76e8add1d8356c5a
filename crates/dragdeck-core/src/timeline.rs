//! Pause-aware elapsed-time bookkeeping for frame-driven animations.
//!
//! A [`Timeline`] never schedules frames itself. The caller's frame loop
//! passes in the current instant on every tick; tests drive it with a
//! [`ManualClock`] instead of a real one.

use crate::easing::{interpolate, progress_ratio};
use std::cell::Cell;
use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// A source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The platform monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Move the clock forward. Stays put if `by` would overflow the instant.
    pub fn advance(&self, by: Duration) {
        match self.now.get().checked_add(by) {
            Some(next) => self.now.set(next),
            None => log::warn!("Manual clock advance of {:?} overflows, ignoring", by),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Lifecycle of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineStatus {
    /// Not started, or reset.
    #[default]
    Idle,
    /// Accumulating elapsed time.
    Running,
    /// Elapsed time frozen until resumed.
    Paused,
    /// Reached the full duration.
    Completed,
    /// Stopped before completion.
    Cancelled,
}

/// One sampled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Linear progress in `[0, 1]`.
    pub ratio: f64,
    /// Eased value between the timeline's start and end.
    pub value: f64,
    /// Whether this sample completed the timeline.
    pub finished: bool,
}

/// Tracks elapsed time across pause boundaries and samples the eased value.
#[derive(Debug, Clone)]
pub struct Timeline {
    duration: Duration,
    start: f64,
    end: f64,
    status: TimelineStatus,
    /// Time accumulated before the current running segment.
    elapsed: Duration,
    /// Start of the current running segment.
    reference: Option<Instant>,
}

impl Timeline {
    /// Create an idle timeline animating from `start` to `end` over `duration`.
    pub fn new(duration: Duration, start: f64, end: f64) -> Self {
        Self {
            duration,
            start,
            end,
            status: TimelineStatus::Idle,
            elapsed: Duration::ZERO,
            reference: None,
        }
    }

    pub fn status(&self) -> TimelineStatus {
        self.status
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Running or paused.
    pub fn is_active(&self) -> bool {
        matches!(self.status, TimelineStatus::Running | TimelineStatus::Paused)
    }

    /// Change the end value; takes effect on the next sample.
    pub fn set_end(&mut self, end: f64) {
        self.end = end;
    }

    /// Start (or restart) from zero elapsed time.
    pub fn start(&mut self, now: Instant) {
        self.elapsed = Duration::ZERO;
        self.reference = Some(now);
        self.status = TimelineStatus::Running;
    }

    /// Freeze elapsed time. Returns `false` if the timeline was not running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.status != TimelineStatus::Running {
            log::debug!("Ignoring pause while {:?}", self.status);
            return false;
        }
        self.fold(now);
        self.status = TimelineStatus::Paused;
        true
    }

    /// Resume accumulating from `now`. Returns `false` if not paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.status != TimelineStatus::Paused {
            log::debug!("Ignoring resume while {:?}", self.status);
            return false;
        }
        self.reference = Some(now);
        self.status = TimelineStatus::Running;
        true
    }

    /// Stop an active timeline where it is.
    pub fn cancel(&mut self, now: Instant) {
        if self.is_active() {
            self.fold(now);
            self.status = TimelineStatus::Cancelled;
        }
    }

    /// Return to idle with zero elapsed time.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.reference = None;
        self.status = TimelineStatus::Idle;
    }

    /// Total elapsed time as of `now`, excluding paused intervals.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.reference {
            Some(reference) => self.elapsed + now.saturating_duration_since(reference),
            None => self.elapsed,
        }
    }

    /// Sample the timeline at `now`, completing it once the duration is reached.
    pub fn sample(&mut self, now: Instant) -> Sample {
        let elapsed = self.elapsed(now);
        let ratio = progress_ratio(elapsed, self.duration);
        let value = interpolate(elapsed, self.duration, self.start, self.end);

        let finished = self.status == TimelineStatus::Running && ratio >= 1.0;
        if finished {
            self.fold(now);
            self.status = TimelineStatus::Completed;
            log::debug!("Timeline completed after {:?}", self.elapsed);
        } else {
            log::trace!("Timeline sample ratio={:.3} value={:.3}", ratio, value);
        }

        Sample {
            ratio,
            value,
            finished,
        }
    }

    fn fold(&mut self, now: Instant) {
        self.elapsed = self.elapsed(now);
        self.reference = None;
    }
}
