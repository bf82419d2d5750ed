//! src/dispatch/runner.rs
//!
//! Orchestration of a full dispatch run:
//! spawn idle pool -> release per policy -> join -> collect.
//!
//! The global start timestamp is captured once, before release, and every
//! worker measures its budget against it. Results come back through the
//! shared [`ResultTable`]; per-worker summaries come back through the
//! outcome channel.

use anyhow::{anyhow, ensure, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::config::RunConfig;
use super::dispatcher;
use super::pool::WorkerPool;
use super::results::ResultTable;
use super::worker::WorkerOutcome;
use crate::task::TaskTable;
use crate::timing;

/// Everything a completed run produces.
#[derive(Debug)]
pub struct RunOutcome {
    /// Digest slots in task order; unset slots are abandoned rows.
    pub results: ResultTable,
    /// Per-worker summaries, sorted by worker number.
    pub workers: Vec<WorkerOutcome>,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}

/// Runs the task table to completion under `config`.
///
/// Always joins every spawned worker before returning; a timed-out or fully
/// disqualified run is still an `Ok` outcome with empty result slots. The
/// only errors are configuration errors caught before any thread spawns,
/// and thread-spawn failures.
///
/// # Errors
/// - `active_workers` exceeds `pool_size` (rows beyond the pool would have
///   no owner).
/// - `pool_size` is 0.
/// - The OS refuses to spawn a worker thread.
pub fn run(tasks: Arc<TaskTable>, config: &RunConfig) -> Result<RunOutcome> {
    ensure!(config.pool_size >= 1, "pool size must be at least 1");
    ensure!(
        config.active_workers <= config.pool_size,
        "active worker count {} exceeds pool size {}",
        config.active_workers,
        config.pool_size
    );

    let results = Arc::new(ResultTable::new(tasks.len()));
    let started = Instant::now();

    let pool = WorkerPool::spawn(Arc::clone(&tasks), Arc::clone(&results), config, started)?;
    dispatcher::release(pool.modes(), config, tasks.len());
    let workers = pool.join();

    let elapsed_ms = timing::elapsed_ms(started);
    let results = Arc::try_unwrap(results)
        .map_err(|_| anyhow!("a worker still holds the result table after join"))?;

    info!(
        elapsed_ms,
        completed = results.completed(),
        abandoned = results.len() - results.completed(),
        "run complete"
    );

    Ok(RunOutcome {
        results,
        workers,
        elapsed_ms,
    })
}
