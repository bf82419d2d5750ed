//! # hash_dispatch
//!
//! Distributes a fixed list of iterated-SHA-256 tasks across a fixed pool
//! of worker threads, under a caller-selected release policy and a shared
//! per-worker deadline.
//!
//! - [`task::TaskTable`] — the ordered, read-only task list.
//! - [`dispatch`] — the worker-release/dispatch/timeout core:
//!   [`dispatch::run`] spawns the pool, releases it per
//!   [`dispatch::ReleasePolicy`], joins, and returns a
//!   [`dispatch::RunOutcome`].
//! - [`digest`] — the pure iterated-hash kernel.
//! - [`report`] — task-order rendering of the results.
//!
//! ## Example
//! ```ignore
//! use std::sync::Arc;
//! use hash_dispatch::dispatch::{self, ReleasePolicy, RunConfig};
//! use hash_dispatch::task::TaskTable;
//!
//! let tasks = Arc::new(TaskTable::from_reader(input)?);
//! let config = RunConfig::builder()
//!     .policy(ReleasePolicy::All)
//!     .active_workers(2)
//!     .timeout_ms(10_000)
//!     .build();
//!
//! let outcome = dispatch::run(Arc::clone(&tasks), &config)?;
//! print!("{}", hash_dispatch::report::render(&tasks, &outcome.results, 2));
//! ```

pub mod digest;
pub mod dispatch;
pub mod report;
pub mod task;
pub mod timing;

pub use dispatch::{ReleasePolicy, RunConfig, RunOutcome, WorkerOutcome};
pub use task::{Task, TaskTable};
