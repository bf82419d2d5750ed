//! src/dispatch/dispatcher.rs
//!
//! The release step: after the task table and policy are known, assign each
//! pooled worker its mode exactly once.
//!
//! A worker index `i` is *disqualified* when `i >= k` (more workers than the
//! caller activated) or `i >= task_count` (more workers than rows).
//! Disqualification always wins over activation, under every policy.
//!
//! Relay reachability: worker 0 is disqualified only when `k == 0` or the
//! task table is empty — and then every other index is disqualified too, so
//! no worker is ever left idle waiting on a predecessor that will never
//! run. The run completes with zero rows processed, which is the accepted
//! behavior, not an error.

use std::sync::Arc;
use tracing::{debug, info};

use super::config::{ReleasePolicy, RunConfig};
use super::mode::{AtomicMode, WorkerMode};
use crate::timing;

/// Returns true when worker `index` must terminate without processing rows.
fn disqualified(index: usize, k: usize, task_count: usize) -> bool {
    index >= k || index >= task_count
}

/// Assigns every worker its mode according to the configured policy.
///
/// Workers may already be polling in their wait phase; each mode word is
/// written exactly once here (relay successors excepted, which are written
/// by their predecessor instead).
pub(crate) fn release(modes: &[Arc<AtomicMode>], config: &RunConfig, task_count: usize) {
    let k = config.active_workers;
    info!(
        policy = ?config.policy,
        active_workers = k,
        pool_size = modes.len(),
        task_count,
        "releasing workers"
    );

    match config.policy {
        ReleasePolicy::All => {
            for (index, mode) in modes.iter().enumerate() {
                if disqualified(index, k, task_count) {
                    mode.store(WorkerMode::Terminate);
                } else {
                    mode.store(WorkerMode::ActiveAll);
                }
            }
        }
        ReleasePolicy::Rate => {
            // Terminate the disqualified first so they exit while the
            // qualifying workers are being staggered.
            for (index, mode) in modes.iter().enumerate() {
                if disqualified(index, k, task_count) {
                    mode.store(WorkerMode::Terminate);
                }
            }
            let mut first = true;
            for (index, mode) in modes.iter().enumerate() {
                if disqualified(index, k, task_count) {
                    continue;
                }
                if !first {
                    timing::sleep_ms(config.rate_delay_ms);
                }
                mode.store(WorkerMode::ActiveRate);
                debug!(worker = index + 1, "rate activation");
                first = false;
            }
        }
        ReleasePolicy::Relay => {
            for (index, mode) in modes.iter().enumerate() {
                if disqualified(index, k, task_count) {
                    mode.store(WorkerMode::Terminate);
                }
            }
            // Only the chain head is released here; every other qualifying
            // worker stays idle until its predecessor finishes or times out.
            if !disqualified(0, k, task_count) {
                if let Some(head) = modes.first() {
                    head.store(WorkerMode::ActiveRelay);
                    debug!(worker = 1, "relay chain head released");
                }
            }
        }
    }
}
