//! Encoder position tracking
//!
//! Translates the raw quadrature count into a bounded logical value. The
//! tracker is the only writer of the hardware count from the main loop:
//! it writes back to clamp the knob at the bounds and to seed it with the
//! value being edited, so the knob's physical position always matches
//! what the screen shows.

use crate::config::PULSES_PER_DETENT;
use crate::traits::QuadratureCounter;

/// Clamped, seedable view of a quadrature counter
pub struct PositionTracker<C> {
    counter: C,
    pulses_per_detent: i32,
    min: i32,
    max: i32,
    /// Last value observed by `changed_since_last`
    last_seen: Option<i32>,
}

impl<C: QuadratureCounter> PositionTracker<C> {
    /// Create a tracker over `counter` with inclusive bounds `[min, max]`
    pub fn new(counter: C, min: i32, max: i32) -> Self {
        Self::with_pulses_per_detent(counter, PULSES_PER_DETENT, min, max)
    }

    /// Create a tracker with a non-default detent resolution
    pub fn with_pulses_per_detent(counter: C, pulses_per_detent: i32, min: i32, max: i32) -> Self {
        let (min, max) = ordered(min, max);
        Self {
            counter,
            pulses_per_detent: pulses_per_detent.max(1),
            min,
            max,
            last_seen: None,
        }
    }

    /// Change the clamp bounds
    ///
    /// Takes effect on the next `read` or `seed`.
    pub fn set_bounds(&mut self, min: i32, max: i32) {
        let (min, max) = ordered(min, max);
        self.min = min;
        self.max = max;
    }

    /// Current bounds (min, max)
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    /// Read the logical position
    ///
    /// If the knob has been turned past a bound, the hardware count is
    /// written back to that bound so further turning has no effect.
    pub fn read(&mut self) -> i32 {
        let logical = self.counter.count() / self.pulses_per_detent;

        if logical < self.min {
            self.counter.set_count(self.raw_for(self.min));
            self.min
        } else if logical > self.max {
            self.counter.set_count(self.raw_for(self.max));
            self.max
        } else {
            logical
        }
    }

    /// Move the logical position to `value` without physical motion
    ///
    /// The value is clamped into the current bounds and becomes the
    /// last-seen value, so seeding never reports a change by itself.
    pub fn seed(&mut self, value: i32) {
        let value = value.clamp(self.min, self.max);
        self.counter.set_count(self.raw_for(value));
        self.last_seen = Some(value);
    }

    /// Report whether `value` differs from the previously observed value
    ///
    /// Records `value` as observed, so asking twice about the same value
    /// reports a change at most once.
    pub fn changed_since_last(&mut self, value: i32) -> bool {
        if self.last_seen == Some(value) {
            false
        } else {
            self.last_seen = Some(value);
            true
        }
    }

    /// Read the position and return it only if it changed
    pub fn poll(&mut self) -> Option<i32> {
        let value = self.read();
        self.changed_since_last(value).then_some(value)
    }

    /// Read the position only when the knob rests exactly on a detent
    ///
    /// Returns `None` while the raw count sits between detents, so a single
    /// pulse of contact jitter never names a neighbouring position.
    pub fn read_detent(&mut self) -> Option<i32> {
        let value = self.read();
        (self.counter.count() == self.raw_for(value)).then_some(value)
    }

    /// Get access to the underlying counter
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Get mutable access to the underlying counter
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }

    fn raw_for(&self, value: i32) -> i32 {
        value.saturating_mul(self.pulses_per_detent)
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
