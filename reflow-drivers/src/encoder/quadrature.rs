//! Quadrature encoder decoding
//!
//! Full-resolution (x4) decoding: every edge on either channel moves the
//! count by one. A detent on the panel knob spans four edges.
//!
//! The decoder runs in the edge handler and accumulates into a
//! [`SharedCount`], which the main loop reads through
//! [`QuadratureCounter`].

use portable_atomic::{AtomicI32, Ordering};
use reflow_core::traits::QuadratureCounter;

/// Count delta indexed by `(previous_state << 2) | state`
///
/// States are `(A << 1) | B`. Transitions that skip a state are treated
/// as noise and contribute nothing.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Quadrature state decoder
#[derive(Debug, Clone, Copy)]
pub struct QuadratureDecoder {
    state: u8,
}

impl QuadratureDecoder {
    /// Create a decoder starting from the current channel levels
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            state: Self::encode(a, b),
        }
    }

    const fn encode(a: bool, b: bool) -> u8 {
        ((a as u8) << 1) | (b as u8)
    }

    /// Feed new channel levels, returning the count delta
    ///
    /// A leading B counts up.
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        let next = Self::encode(a, b);
        let delta = TRANSITIONS[((self.state << 2) | next) as usize];
        self.state = next;
        delta
    }
}

/// Encoder count shared between the edge handler and the main loop
pub struct SharedCount {
    count: AtomicI32,
}

impl SharedCount {
    /// Create a zeroed count
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
        }
    }

    /// Accumulate a decoder delta
    pub fn add(&self, delta: i8) {
        if delta != 0 {
            self.count.fetch_add(delta.into(), Ordering::Relaxed);
        }
    }

    /// Current raw count
    pub fn get(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Overwrite the raw count
    pub fn set(&self, count: i32) {
        self.count.store(count, Ordering::Relaxed);
    }
}

impl Default for SharedCount {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureCounter for &SharedCount {
    fn count(&self) -> i32 {
        self.get()
    }

    fn set_count(&mut self, count: i32) {
        self.set(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Gray sequence in the counting-up direction
    const GRAY: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

    fn feed(decoder: &mut QuadratureDecoder, count: &SharedCount, levels: &[(bool, bool)]) {
        for &(a, b) in levels {
            count.add(decoder.update(a, b));
        }
    }

    #[test]
    fn test_one_detent_forward() {
        let count = SharedCount::new();
        let mut decoder = QuadratureDecoder::new(false, false);
        feed(&mut decoder, &count, &[GRAY[1], GRAY[2], GRAY[3], GRAY[0]]);
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_one_detent_backward() {
        let count = SharedCount::new();
        let mut decoder = QuadratureDecoder::new(false, false);
        feed(&mut decoder, &count, &[GRAY[3], GRAY[2], GRAY[1], GRAY[0]]);
        assert_eq!(count.get(), -4);
    }

    #[test]
    fn test_contact_bounce_cancels() {
        let count = SharedCount::new();
        let mut decoder = QuadratureDecoder::new(false, false);
        feed(
            &mut decoder,
            &count,
            &[GRAY[1], GRAY[0], GRAY[1], GRAY[0], GRAY[1], GRAY[0]],
        );
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_skipped_state_ignored() {
        let mut decoder = QuadratureDecoder::new(false, false);
        assert_eq!(decoder.update(true, true), 0);
        assert_eq!(decoder.update(true, true), 0);
    }

    #[test]
    fn test_counter_trait_writes_through() {
        let shared = SharedCount::new();
        let mut counter = &shared;
        counter.set_count(240);
        assert_eq!(shared.get(), 240);
        shared.add(-1);
        assert_eq!(counter.count(), 239);
    }

    proptest! {
        #[test]
        fn prop_count_follows_gray_walk(steps in prop::collection::vec(prop::bool::ANY, 0..200)) {
            let count = SharedCount::new();
            let mut decoder = QuadratureDecoder::new(false, false);
            let mut phase: usize = 0;
            let mut expected: i32 = 0;

            for forward in steps {
                phase = if forward { (phase + 1) % 4 } else { (phase + 3) % 4 };
                expected += if forward { 1 } else { -1 };
                let (a, b) = GRAY[phase];
                count.add(decoder.update(a, b));
            }

            prop_assert_eq!(count.get(), expected);
        }
    }
}
