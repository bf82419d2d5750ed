//! hash-dispatch CLI.
//!
//! Reads the task list from stdin (count line, then `id name amount` rows),
//! asks for the active worker count on the controlling terminal so stdin
//! can stay redirected, runs the dispatch core, and prints the result table
//! in task order. Lifecycle events go to stderr via `tracing` and are
//! filterable with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use hash_dispatch::dispatch::{self, default_pool_size, ReleasePolicy, RunConfig};
use hash_dispatch::{report, task::TaskTable};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Release every qualifying worker at once
    All,
    /// Release workers one at a time, ~1ms apart
    Rate,
    /// Release only the first worker; each worker wakes the next
    Relay,
}

impl From<PolicyArg> for ReleasePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::All => ReleasePolicy::All,
            PolicyArg::Rate => ReleasePolicy::Rate,
            PolicyArg::Relay => ReleasePolicy::Relay,
        }
    }
}

#[derive(Parser)]
#[command(name = "hash-dispatch")]
#[command(about = "Dispatch iterated SHA-256 tasks across a worker-thread pool", long_about = None)]
struct Args {
    /// Worker release policy
    #[arg(long, value_enum)]
    policy: PolicyArg,

    /// Per-worker execution budget in milliseconds (0 expires immediately)
    #[arg(long, default_value_t = dispatch::DEFAULT_TIMEOUT_MS)]
    timeout: u64,

    /// Number of workers to activate; prompts on the terminal if omitted
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let tasks = TaskTable::from_reader(stdin.lock()).context("failed to load task list")?;
    let tasks = Arc::new(tasks);

    let pool_size = default_pool_size();
    let max_active = pool_size.min(tasks.len());
    let active_workers = match args.workers {
        Some(k) => k.min(max_active),
        None => prompt_worker_count(max_active)?,
    };

    let config = RunConfig::builder()
        .policy(args.policy.into())
        .timeout_ms(args.timeout)
        .active_workers(active_workers)
        .pool_size(pool_size)
        .build();

    let outcome = dispatch::run(Arc::clone(&tasks), &config)?;
    print!("{}", report::render(&tasks, &outcome.results, active_workers));

    Ok(())
}

/// Asks for the active worker count on `/dev/tty`, clamped to `max`.
///
/// stdin carries the task list, so the prompt goes to the controlling
/// terminal instead. Non-interactive runs (no tty, or unparseable input)
/// fall back to `max`.
fn prompt_worker_count(max: usize) -> Result<usize> {
    let Ok(tty) = File::open("/dev/tty") else {
        return Ok(max);
    };

    eprint!("workers to activate (1..={}): ", max);
    io::stderr().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    BufReader::new(tty)
        .read_line(&mut line)
        .context("failed to read worker count from terminal")?;

    Ok(line.trim().parse::<usize>().map_or(max, |k| k.min(max)))
}
