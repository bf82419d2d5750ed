//! src/dispatch/results.rs
//!
//! The shared result table.
//!
//! One write-once slot per task row, pre-sized before any worker is
//! released. The strided ownership rule guarantees a single writer per
//! slot, so slots need no lock; `OnceLock` makes the write-once contract
//! explicit. Slots left unset are rows abandoned by a timed-out (or never
//! released) worker. The caller reads the table only after every worker has
//! been joined, which is the memory-visibility barrier.

use std::sync::OnceLock;

/// Index-addressed digest output buffer, one slot per task row.
#[derive(Debug)]
pub struct ResultTable {
    slots: Vec<OnceLock<String>>,
}

impl ResultTable {
    /// Creates a table with `task_count` unset slots.
    pub fn new(task_count: usize) -> Self {
        let mut slots = Vec::with_capacity(task_count);
        slots.resize_with(task_count, OnceLock::new);
        Self { slots }
    }

    /// Records the digest for `row`.
    ///
    /// The strided partition guarantees each slot has exactly one writer;
    /// a second write to the same slot would indicate a routing bug.
    pub fn set(&self, row: usize, digest: String) {
        let stored = self.slots[row].set(digest);
        debug_assert!(stored.is_ok(), "row {} written twice", row);
    }

    /// Digest for `row`, or `None` if the row was abandoned.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.slots.get(row).and_then(|slot| slot.get()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of rows that were actually completed.
    pub fn completed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Slots in task order, `None` for abandoned rows.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots.iter().map(|slot| slot.get().map(String::as_str))
    }
}
