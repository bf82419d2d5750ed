//! src/dispatch/pool.rs
//!
//! The fixed worker pool.
//!
//! All `pool_size` workers are spawned idle before the release policy is
//! applied; the dispatcher later flips each worker's mode exactly once. The
//! pool owns the join handles and each worker's mode word, and exposes the
//! mode words to the dispatcher.
//!
//! Workers report through a shared outcome channel rather than join return
//! values; joining the pool drains that channel after every thread has
//! exited.

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::debug;

use super::config::RunConfig;
use super::mode::AtomicMode;
use super::results::ResultTable;
use super::router::RowRouter;
use super::worker::{self, WorkerContext, WorkerOutcome};
use crate::task::TaskTable;

/// Fixed-size set of spawned workers plus their shared mode words.
pub(crate) struct WorkerPool {
    workers: Vec<thread::JoinHandle<()>>,
    modes: Vec<Arc<AtomicMode>>,
    outcome_rx: crossbeam_channel::Receiver<WorkerOutcome>,
}

impl WorkerPool {
    /// Spawns `config.pool_size` idle workers.
    ///
    /// Worker `i` receives a reference to worker `i + 1`'s mode word only
    /// when that successor qualifies for activation (`i + 1 < k` and
    /// `i + 1 < task_count`); this is the entire relay wiring.
    pub(crate) fn spawn(
        tasks: Arc<TaskTable>,
        results: Arc<ResultTable>,
        config: &RunConfig,
        started: Instant,
    ) -> Result<Self> {
        let pool_size = config.pool_size;
        let task_count = tasks.len();
        let k = config.active_workers;
        let router = RowRouter::new(k.max(1));

        let modes: Vec<Arc<AtomicMode>> =
            (0..pool_size).map(|_| Arc::new(AtomicMode::new())).collect();
        let (outcome_tx, outcome_rx) = unbounded();

        let mut workers = Vec::with_capacity(pool_size);
        for index in 0..pool_size {
            let successor = index + 1;
            let next = if successor < k && successor < task_count {
                modes.get(successor).cloned()
            } else {
                None
            };

            let ctx = WorkerContext {
                index,
                mode: Arc::clone(&modes[index]),
                next,
                tasks: Arc::clone(&tasks),
                results: Arc::clone(&results),
                router,
                timeout_ms: config.timeout_ms,
                poll_interval_ms: config.poll_interval_ms,
                started,
                outcome_tx: outcome_tx.clone(),
            };

            let handle = thread::Builder::new()
                .name(format!("dispatch-worker-{}", index + 1))
                .spawn(move || worker::run(ctx))
                .with_context(|| format!("failed to spawn worker thread {}", index + 1))?;

            workers.push(handle);
        }
        drop(outcome_tx);

        debug!(pool_size, task_count, "worker pool spawned idle");
        Ok(Self {
            workers,
            modes,
            outcome_rx,
        })
    }

    /// Mode words in worker-index order, for the release dispatcher.
    pub(crate) fn modes(&self) -> &[Arc<AtomicMode>] {
        &self.modes
    }

    /// Joins every worker and returns their outcomes sorted by worker
    /// number. Called once; all result-table writes are visible afterwards.
    pub(crate) fn join(self) -> Vec<WorkerOutcome> {
        for handle in self.workers {
            // Workers never panic; a poisoned join would only lose that
            // worker's outcome, which the drain below tolerates.
            let _ = handle.join();
        }

        let mut outcomes: Vec<WorkerOutcome> = self.outcome_rx.try_iter().collect();
        outcomes.sort_by_key(|o| o.worker);
        outcomes
    }
}
