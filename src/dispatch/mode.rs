//! src/dispatch/mode.rs
//!
//! The shared per-worker mode word.
//!
//! `mode` is the only field in the system mutated by a party other than its
//! own worker: the dispatcher writes it once at release time, and in relay
//! mode a worker writes its successor's word once. Every mutation is a
//! single-scalar transition out of [`WorkerMode::Idle`], so an atomic word
//! is sufficient and no lock is involved.

use std::sync::atomic::{AtomicU8, Ordering};

/// Command/state word polled by each worker.
///
/// Transitions are one-shot: `Idle -> Terminate` or `Idle -> Active*`.
/// Workers never write their own word; they only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerMode {
    /// Waiting for release; the worker polls with a bounded sleep.
    Idle = 0,
    /// Disqualified: exit immediately without processing any row.
    Terminate = 1,
    /// Released simultaneously with all other qualifying workers.
    ActiveAll = 2,
    /// Released by the dispatcher with a staggered delay.
    ActiveRate = 3,
    /// Released by the predecessor worker in the relay chain.
    ActiveRelay = 4,
}

impl WorkerMode {
    /// True for any of the three released variants.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            WorkerMode::ActiveAll | WorkerMode::ActiveRate | WorkerMode::ActiveRelay
        )
    }

    fn from_word(word: u8) -> Self {
        match word {
            0 => WorkerMode::Idle,
            1 => WorkerMode::Terminate,
            2 => WorkerMode::ActiveAll,
            3 => WorkerMode::ActiveRate,
            _ => WorkerMode::ActiveRelay,
        }
    }
}

/// Atomic wrapper around [`WorkerMode`].
///
/// Stores use `Release` and loads `Acquire` so the relay hand-off pairs with
/// the successor's wake-up read.
#[derive(Debug)]
pub struct AtomicMode(AtomicU8);

impl AtomicMode {
    pub fn new() -> Self {
        Self(AtomicU8::new(WorkerMode::Idle as u8))
    }

    pub fn load(&self) -> WorkerMode {
        WorkerMode::from_word(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, mode: WorkerMode) {
        self.0.store(mode as u8, Ordering::Release);
    }
}

impl Default for AtomicMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(AtomicMode::new().load(), WorkerMode::Idle);
    }

    #[test]
    fn round_trips_every_variant() {
        let mode = AtomicMode::new();
        for m in [
            WorkerMode::Idle,
            WorkerMode::Terminate,
            WorkerMode::ActiveAll,
            WorkerMode::ActiveRate,
            WorkerMode::ActiveRelay,
        ] {
            mode.store(m);
            assert_eq!(mode.load(), m);
        }
    }

    #[test]
    fn only_released_variants_are_active() {
        assert!(!WorkerMode::Idle.is_active());
        assert!(!WorkerMode::Terminate.is_active());
        assert!(WorkerMode::ActiveAll.is_active());
        assert!(WorkerMode::ActiveRate.is_active());
        assert!(WorkerMode::ActiveRelay.is_active());
    }
}
