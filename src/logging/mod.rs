// src/logging/mod.rs

//! Per-run file logging using `tracing` + `tracing-subscriber`.
//!
//! [`initialize_run`] is meant to be called once from the process entry
//! point. It creates `logs/<timestamp>/` under the root directory and installs
//! a global subscriber that appends every record to
//! `logs/<timestamp>/<timestamp>.log`.
//!
//! Tests that must not touch global state can use [`LogRun::prepare`] and
//! [`LogRun::subscriber`] with `tracing::subscriber::with_default`.

pub mod config;
pub mod format;
pub mod run;

use std::fs;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{info, warn};

use crate::errors::{LoggingError, Result};

pub use config::{LOG_LEVEL_ENV, RunLoggerConfig, default_root_dir, parse_level_str};
pub use format::RunLineFormat;
pub use run::{LOGS_DIR_NAME, LogRun, RunTimestamp};

static RUN: OnceLock<LogRun> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Create this process's log run and install it as the global subscriber.
///
/// Only the first call does anything; later calls return
/// [`LoggingError::AlreadyInitialized`] without touching the filesystem.
/// If some other global subscriber is already installed, nothing is created
/// and [`LoggingError::SubscriberAlreadySet`] is returned.
pub fn initialize_run(config: &RunLoggerConfig) -> Result<LogRun> {
    let _lock = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(existing) = RUN.get() {
        warn!(log_file = ?existing.log_file(), "run logger already initialized");
        return Err(LoggingError::AlreadyInitialized {
            log_file: existing.log_file().to_path_buf(),
        });
    }

    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::SubscriberAlreadySet);
    }

    let root = config.resolve_root_dir();
    let run = LogRun::prepare(&root, RunTimestamp::now())?;

    let installed = run.subscriber(config.level()).and_then(|subscriber| {
        tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::from)
    });
    if let Err(e) = installed {
        discard_unused_run(&run);
        return Err(e);
    }

    let run = RUN.get_or_init(|| run);
    info!(log_file = ?run.log_file(), level = %config.level(), "run logger initialized");

    Ok(run.clone())
}

/// Remove the files `prepare` left behind for a run that never got installed.
///
/// Only an empty log file and an empty run directory are removed.
fn discard_unused_run(run: &LogRun) {
    let empty = fs::metadata(run.log_file()).is_ok_and(|m| m.len() == 0);
    if empty {
        let _ = fs::remove_file(run.log_file());
        let _ = fs::remove_dir(run.log_dir());
    }
}

/// The run installed by [`initialize_run`], if any.
pub fn current_run() -> Option<&'static LogRun> {
    RUN.get()
}
