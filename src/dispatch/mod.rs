//! src/dispatch/mod.rs
//!
//! Worker-release, dispatch, and timeout — the concurrent core.
//!
//! # Architecture Overview
//!
//! ```text
//!   TaskTable (read-only)          RunConfig (policy, k, timeout)
//!        │                               │
//!        ▼                               ▼
//!  ┌───────────────────────────────────────────────┐
//!  │ runner::run                                   │
//!  │   1. spawn WorkerPool (W idle workers)        │
//!  │   2. dispatcher::release (set each mode once) │
//!  │   3. join + drain outcomes                    │
//!  └──────┬──────────────┬──────────────┬──────────┘
//!         ▼              ▼              ▼
//!     worker 1        worker 2  ...  worker W
//!     poll mode       poll mode      poll mode
//!     rows {0,k,..}   rows {1,k+1,..}   (or Terminate)
//!         │              │              │
//!         └──────────────┴──────────────┘
//!                        ▼
//!              ResultTable (write-once slots)
//! ```
//!
//! Release policies:
//! - **All**: every qualifying worker is activated in one pass.
//! - **Rate**: qualifying workers are activated one at a time, ~1ms apart.
//! - **Relay**: only worker 1 is activated; each worker releases its
//!   successor after finishing (or timing out on) its own rows.
//!
//! The per-worker mode word is the only concurrently mutated state; row
//! ownership is a strided partition so result slots never contend.
//!
//! # Module Structure
//!
//! ```text
//! src/dispatch/
//! ├── mod.rs         # Public API exports + architecture docs
//! ├── config.rs      # ReleasePolicy, RunConfig + builder
//! ├── mode.rs        # WorkerMode + AtomicMode (shared scalar)
//! ├── router.rs      # Strided row-ownership partition
//! ├── results.rs     # Write-once result slots
//! ├── worker.rs      # Worker control loop + WorkerOutcome
//! ├── pool.rs        # Spawn/join of the fixed thread pool
//! ├── dispatcher.rs  # Release step per policy
//! └── runner.rs      # run(): spawn -> release -> join -> collect
//! ```

mod config;
mod dispatcher;
mod mode;
mod pool;
mod results;
mod router;
mod runner;
mod worker;

pub use config::{
    default_pool_size, ReleasePolicy, RunConfig, RunConfigBuilder, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_RATE_DELAY_MS, DEFAULT_TIMEOUT_MS,
};
pub use mode::{AtomicMode, WorkerMode};
pub use results::ResultTable;
pub use router::RowRouter;
pub use runner::{run, RunOutcome};
pub use worker::WorkerOutcome;
