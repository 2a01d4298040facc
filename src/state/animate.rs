//! Transition timing.
//!
//! A [`Transition`] maps elapsed time to eased progress in `[0, 1]`. Time
//! comes from a [`Clock`] so reveal state can be driven deterministically in
//! tests with a [`ManualClock`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use folio_tui::state::animate::{Clock, ManualClock, Transition};
//!
//! let clock = ManualClock::new();
//! let transition = Transition::new(Duration::from_millis(600));
//! let start = clock.now();
//!
//! clock.advance(Duration::from_millis(600));
//! assert_eq!(transition.progress(start, clock.now()), 1.0);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// CLOCK
// =============================================================================

/// Source of "now".
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// =============================================================================
// TRANSITION
// =============================================================================

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fixed-length eased transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    duration: Duration,
}

impl Transition {
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Transition that completes the moment it starts.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn linear(&self, started: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, started: Instant, now: Instant) -> f32 {
        ease_out(self.linear(started, now))
    }

    pub fn is_finished(&self, started: Instant, now: Instant) -> bool {
        now.saturating_duration_since(started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints_and_shape() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        // Ease-out runs ahead of linear
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn test_progress_over_time() {
        let clock = ManualClock::new();
        let transition = Transition::new(Duration::from_millis(600));
        let start = clock.now();

        assert_eq!(transition.progress(start, clock.now()), 0.0);

        clock.advance(Duration::from_millis(300));
        assert!((transition.linear(start, clock.now()) - 0.5).abs() < 1e-6);
        assert!(!transition.is_finished(start, clock.now()));

        clock.advance(Duration::from_millis(400));
        assert_eq!(transition.progress(start, clock.now()), 1.0);
        assert!(transition.is_finished(start, clock.now()));
    }

    #[test]
    fn test_instant_transition() {
        let clock = ManualClock::new();
        let t = Transition::instant();
        assert_eq!(t.progress(clock.now(), clock.now()), 1.0);
        assert!(t.is_finished(clock.now(), clock.now()));
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let a = ManualClock::new();
        let b = a.clone();
        let before = b.now();
        a.advance(Duration::from_secs(1));
        assert_eq!(b.now() - before, Duration::from_secs(1));
    }
}
