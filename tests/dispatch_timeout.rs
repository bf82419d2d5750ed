//! Timeout supervision and its interaction with the relay chain.
//!
//! Tests cover:
//! - Zero timeout expiring on the very first deadline check
//! - Abandoned rows staying unset in the result table
//! - A timed-out relay worker still releasing its successor
//! - Generous budgets leaving no timeout flags behind

mod common;
use common::{spec_tasks, tasks};

use anyhow::Result;
use std::sync::Arc;

use hash_dispatch::dispatch::{self, ReleasePolicy, RunConfig, WorkerMode};

fn config(policy: ReleasePolicy, k: usize, pool: usize, timeout_ms: u64) -> RunConfig {
    RunConfig::builder()
        .policy(policy)
        .active_workers(k)
        .pool_size(pool)
        .timeout_ms(timeout_ms)
        .poll_interval_ms(1)
        .build()
}

#[test]
fn zero_timeout_abandons_every_row_under_all_policy() -> Result<()> {
    let tasks = Arc::new(spec_tasks());
    let outcome = dispatch::run(Arc::clone(&tasks), &config(ReleasePolicy::All, 2, 4, 0))?;

    assert_eq!(outcome.results.completed(), 0);
    assert!(outcome.results.iter().all(|slot| slot.is_none()));

    let released: Vec<_> = outcome
        .workers
        .iter()
        .filter(|o| o.mode == WorkerMode::ActiveAll)
        .collect();
    assert_eq!(released.len(), 2);
    assert!(released.iter().all(|o| o.timed_out && o.rows_completed == 0));
    Ok(())
}

#[test]
fn relay_zero_timeout_single_worker_joins_cleanly() -> Result<()> {
    // Spec scenario: k=1 under relay with a zero budget. Worker 1 is
    // released, expires on its first owned row, abandons everything, and
    // has no successor to release; the run still joins.
    let tasks = Arc::new(spec_tasks());
    let outcome = dispatch::run(Arc::clone(&tasks), &config(ReleasePolicy::Relay, 1, 4, 0))?;

    assert_eq!(outcome.results.completed(), 0);

    let head = &outcome.workers[0];
    assert_eq!(head.mode, WorkerMode::ActiveRelay);
    assert!(head.timed_out);
    assert_eq!(head.rows_completed, 0);

    assert!(outcome.workers[1..]
        .iter()
        .all(|o| o.mode == WorkerMode::Terminate));
    Ok(())
}

#[test]
fn timed_out_relay_worker_still_releases_its_successor() -> Result<()> {
    let tasks = Arc::new(tasks(&[("1", "a", 1), ("2", "b", 1), ("3", "c", 1)]));
    let outcome = dispatch::run(Arc::clone(&tasks), &config(ReleasePolicy::Relay, 3, 3, 0))?;

    // Every link of the chain must have been released despite timing out;
    // a swallowed release would leave successors idle and the join hanging.
    assert_eq!(outcome.workers.len(), 3);
    assert!(outcome
        .workers
        .iter()
        .all(|o| o.mode == WorkerMode::ActiveRelay && o.timed_out));
    assert_eq!(outcome.results.completed(), 0);
    Ok(())
}

#[test]
fn generous_budget_times_nothing_out() -> Result<()> {
    let tasks = Arc::new(spec_tasks());
    let outcome = dispatch::run(
        Arc::clone(&tasks),
        &config(ReleasePolicy::Rate, 2, 4, 60_000),
    )?;

    assert_eq!(outcome.results.completed(), 4);
    assert!(outcome.workers.iter().all(|o| !o.timed_out));
    Ok(())
}

#[test]
fn partial_results_keep_task_order_alignment() -> Result<()> {
    // With a zero budget nothing completes, so every slot must be unset and
    // the table must still be exactly task-count long.
    let tasks = Arc::new(spec_tasks());
    let outcome = dispatch::run(Arc::clone(&tasks), &config(ReleasePolicy::All, 4, 4, 0))?;

    assert_eq!(outcome.results.len(), tasks.len());
    for row in 0..tasks.len() {
        assert_eq!(outcome.results.get(row), None);
    }
    Ok(())
}
