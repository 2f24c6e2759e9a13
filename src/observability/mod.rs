//! Observability subsystem
//!
//! - Structured logging (JSON lines through the `log` facade)
//! - Operational counters
//!
//! Observability is read-only: nothing here affects query results.
//!
//! # Usage
//!
//! ```ignore
//! use salesdb::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("DATASET_LOADED", &[("rows", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_queries_executed();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Install `env_logger` so that event lines are printed verbatim.
///
/// Defaults to `info`; `RUST_LOG` overrides. Safe to call more than once.
pub fn init_logging() {
    use std::io::Write;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
