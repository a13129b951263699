//! Debounced button edge capture
//!
//! The edge handler runs in interrupt context and the poller in the main
//! loop. Only the interrupt side touches the window timestamp; the main
//! loop only clears the pending flag. The flag is swapped atomically so a
//! press can never be observed twice or lost between read and clear.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Button edge gate with a minimum re-trigger interval
///
/// Intended to live in a `static` shared by the edge interrupt and the
/// main loop.
pub struct DebounceGate {
    /// An accepted edge is waiting for the main loop
    pending: AtomicBool,
    /// At least one edge has been accepted since power-up
    primed: AtomicBool,
    /// Timestamp of the last accepted edge (ms, wrapping)
    last_accepted_ms: AtomicU32,
    /// Minimum interval between accepted edges (ms)
    window_ms: u32,
}

impl DebounceGate {
    /// Create a gate with the given debounce window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            pending: AtomicBool::new(false),
            primed: AtomicBool::new(false),
            last_accepted_ms: AtomicU32::new(0),
            window_ms,
        }
    }

    /// Record a falling edge seen at `now_ms`
    ///
    /// Call from interrupt context only. Returns true if the edge was
    /// accepted (pending flag set and window restarted), false if it fell
    /// inside the debounce window and was dropped.
    pub fn on_edge(&self, now_ms: u32) -> bool {
        if self.primed.load(Ordering::Acquire) {
            let elapsed = now_ms.wrapping_sub(self.last_accepted_ms.load(Ordering::Relaxed));
            if elapsed < self.window_ms {
                return false;
            }
        }

        self.last_accepted_ms.store(now_ms, Ordering::Relaxed);
        self.primed.store(true, Ordering::Release);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Take the pending press, if any
    ///
    /// Call from the main loop only. Returns true at most once per
    /// accepted edge.
    pub fn poll_and_clear(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Debounce window in milliseconds
    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
