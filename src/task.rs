//! src/task.rs
//!
//! The task table: an ordered, read-only list of digest tasks.
//!
//! The table is loaded exactly once before any worker is released and never
//! mutated afterwards, so workers can share it through an `Arc` without
//! synchronization.
//!
//! # Input format
//!
//! ```text
//! <count>
//! <id> <name> <amount>
//! <id> <name> <amount>
//! ...
//! ```
//!
//! The first token is the number of rows; each row is three
//! whitespace-separated fields where `name` is the digest seed and `amount`
//! the iteration count.

use anyhow::{anyhow, Context, Result};
use std::io::BufRead;

/// A single unit of work: hash `name` for `amount` iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub amount: u32,
}

/// Ordered list of tasks, immutable after load.
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    tasks: Vec<Task>,
}

impl TaskTable {
    /// Wraps an already-built task list.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Reads a task table in the count-then-rows format.
    ///
    /// # Errors
    /// Returns an error if the count is missing or malformed, a row has
    /// fewer than three fields, or an `amount` is not a non-negative
    /// integer. Extra trailing lines beyond the declared count are ignored.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut lines = reader.lines();

        let count_line = lines
            .next()
            .ok_or_else(|| anyhow!("task input is empty; expected a count line"))?
            .context("failed to read task count line")?;
        let count: usize = count_line
            .trim()
            .parse()
            .with_context(|| format!("invalid task count {:?}", count_line.trim()))?;

        let mut tasks = Vec::with_capacity(count);
        for row in 0..count {
            let line = lines
                .next()
                .ok_or_else(|| {
                    anyhow!("task input ended early: expected {} rows, got {}", count, row)
                })?
                .with_context(|| format!("failed to read task row {}", row))?;

            let mut fields = line.split_whitespace();
            let (id, name, amount) = match (fields.next(), fields.next(), fields.next()) {
                (Some(id), Some(name), Some(amount)) => (id, name, amount),
                _ => {
                    return Err(anyhow!(
                        "task row {} is malformed (expected `id name amount`): {:?}",
                        row,
                        line
                    ))
                }
            };

            let amount: u32 = amount
                .parse()
                .with_context(|| format!("task row {}: invalid amount {:?}", row, amount))?;

            tasks.push(Task {
                id: id.to_string(),
                name: name.to_string(),
                amount,
            });
        }

        Ok(Self { tasks })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Task> {
        self.tasks.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}
