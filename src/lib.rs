// src/lib.rs

//! Error annotation and per-run file logging.
//!
//! - [`annotate`] wraps errors with the file and line they were raised at.
//! - [`logging`] sends every `tracing` record of a process run to
//!   `logs/<timestamp>/<timestamp>.log`.
//!
//! The two are independent; a typical entry point combines them:
//!
//! ```no_run
//! use faultline::{AnnotateExt, RunLoggerConfig, initialize_run};
//!
//! fn main() -> anyhow::Result<()> {
//!     initialize_run(&RunLoggerConfig::from_env())?;
//!
//!     if let Err(err) = std::fs::read_to_string("settings.toml").annotate_err() {
//!         tracing::error!("{err}");
//!         return Err(err.into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod annotate;
pub mod errors;
pub mod logging;

pub use annotate::{
    AnnotateExt, AnnotatedError, FailureContext, SourceLocation, annotate, catch_failure,
};
pub use logging::{LogRun, RunLoggerConfig, current_run, initialize_run};
