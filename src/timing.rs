//! src/timing.rs
//!
//! Small monotonic timing helpers shared by the dispatcher and workers.
//!
//! All elapsed values are expressed in milliseconds relative to a caller-held
//! [`Instant`], so the process never depends on wall-clock time that could
//! jump backwards. Sleeps are bounded and resume to completion if the thread
//! is woken early.

use std::time::{Duration, Instant};

/// Milliseconds elapsed since `start` on the monotonic clock.
pub fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Sleep for approximately `ms` milliseconds. Returns immediately for 0.
pub fn sleep_ms(ms: u64) {
    if ms > 0 {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Returns true once `timeout_ms` has elapsed since `start`.
///
/// A `timeout_ms` of 0 is treated as already expired: the very first check a
/// worker performs fails, so it abandons every owned row without computing
/// any digest.
pub fn deadline_expired(start: Instant, timeout_ms: u64) -> bool {
    elapsed_ms(start) >= timeout_ms
}
