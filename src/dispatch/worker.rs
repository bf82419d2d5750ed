//! src/dispatch/worker.rs
//!
//! The per-worker control loop.
//!
//! Every worker in the pool runs the same loop:
//! 1. Wait phase: poll the mode word with a bounded sleep until it leaves
//!    `Idle`.
//! 2. Terminate check: a disqualified worker logs and returns without
//!    touching any row.
//! 3. Row loop: before each owned row, check the shared deadline; on expiry
//!    abandon every remaining row, otherwise compute the digest and write
//!    the row's slot.
//! 4. Relay propagation: in relay mode, release the successor — including
//!    after a timeout, or the chain would stall permanently.
//! 5. Return: send a [`WorkerOutcome`] on the outcome channel and exit.
//!
//! A worker never returns an error: every abnormal path is an early return
//! recorded in its outcome and the absence of result-table entries.

use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

use super::mode::{AtomicMode, WorkerMode};
use super::results::ResultTable;
use super::router::RowRouter;
use crate::digest;
use crate::task::TaskTable;
use crate::timing;

/// Everything a single worker needs, fixed at spawn time.
///
/// `mode` is read-only from the worker's perspective; `next` is the one
/// peer field it may write, and only in relay mode. The reference exists
/// only when the successor index qualifies for activation, which is what
/// keeps disqualified workers out of the relay chain.
pub(crate) struct WorkerContext {
    /// 0-based worker index; reported as `index + 1` externally.
    pub index: usize,
    pub mode: Arc<AtomicMode>,
    pub next: Option<Arc<AtomicMode>>,
    pub tasks: Arc<TaskTable>,
    pub results: Arc<ResultTable>,
    pub router: RowRouter,
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
    /// Global start captured once before release, shared by all workers.
    pub started: Instant,
    pub outcome_tx: Sender<WorkerOutcome>,
}

/// Summary a worker sends back when it returns.
#[derive(Debug, Clone)]
pub struct WorkerOutcome {
    /// 1-based worker number.
    pub worker: usize,
    /// Mode the worker observed when it left the wait phase.
    pub mode: WorkerMode,
    /// Rows whose digests were written before returning.
    pub rows_completed: usize,
    /// True if the worker abandoned rows because its budget expired.
    pub timed_out: bool,
    /// Offset from the global start when the worker was released, in ms.
    pub started_ms: u64,
    /// Offset from the global start when the worker returned, in ms.
    pub finished_ms: u64,
}

/// Runs one worker to completion. Never panics, never errors.
pub(crate) fn run(ctx: WorkerContext) {
    let worker = ctx.index + 1;

    // Wait phase: bounded polling sleep, not a tight spin.
    let mode = loop {
        match ctx.mode.load() {
            WorkerMode::Idle => timing::sleep_ms(ctx.poll_interval_ms),
            released => break released,
        }
    };

    if mode == WorkerMode::Terminate {
        let now = timing::elapsed_ms(ctx.started);
        debug!(worker, "worker terminated without processing any row");
        send_outcome(&ctx, mode, 0, false, now, now);
        return;
    }

    let started_ms = timing::elapsed_ms(ctx.started);
    debug!(worker, ?mode, started_ms, "worker released");

    let mut rows_completed = 0;
    let mut timed_out = false;

    for row in ctx.router.owned_rows(ctx.index, ctx.tasks.len()) {
        if timing::deadline_expired(ctx.started, ctx.timeout_ms) {
            warn!(
                worker,
                row,
                rows_completed,
                timeout_ms = ctx.timeout_ms,
                "budget exhausted, abandoning remaining rows"
            );
            timed_out = true;
            break;
        }

        // Owned rows are always in range; the router never yields >= len.
        let Some(task) = ctx.tasks.get(row) else {
            break;
        };
        let hex = digest::iterated_sha256_hex(task.name.as_bytes(), task.amount);
        ctx.results.set(row, hex);
        rows_completed += 1;
        trace!(worker, row, task = %task.name, "row complete");
    }

    // A timed-out relay worker must still release its successor.
    if mode == WorkerMode::ActiveRelay {
        if let Some(next) = &ctx.next {
            next.store(WorkerMode::ActiveRelay);
            trace!(worker, "released successor worker {}", worker + 1);
        }
    }

    let finished_ms = timing::elapsed_ms(ctx.started);
    debug!(worker, rows_completed, timed_out, finished_ms, "worker returning");
    send_outcome(&ctx, mode, rows_completed, timed_out, started_ms, finished_ms);
}

fn send_outcome(
    ctx: &WorkerContext,
    mode: WorkerMode,
    rows_completed: usize,
    timed_out: bool,
    started_ms: u64,
    finished_ms: u64,
) {
    // The receiver outlives the pool join; a send can only fail if the
    // caller dropped the run early, in which case nobody reads outcomes.
    let _ = ctx.outcome_tx.send(WorkerOutcome {
        worker: ctx.index + 1,
        mode,
        rows_completed,
        timed_out,
        started_ms,
        finished_ms,
    });
}
