// src/logging/run.rs

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, NaiveDateTime, SubsecRound};
use tracing::{Level, Subscriber};

use super::format::RunLineFormat;
use crate::errors::{LoggingError, Result};

/// Name of the directory (under the root) holding one subdirectory per run.
pub const LOGS_DIR_NAME: &str = "logs";

const RUN_ID_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Second-resolution timestamp identifying a run, e.g. `2024_05_01_13_45_10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTimestamp(NaiveDateTime);

impl RunTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.trunc_subsecs(0))
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RUN_ID_FORMAT))
    }
}

/// On-disk location of one process run's log:
/// `<root>/logs/<timestamp>/<timestamp>.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRun {
    timestamp: RunTimestamp,
    log_dir: PathBuf,
    log_file: PathBuf,
}

impl LogRun {
    /// Create the run directory and an empty log file under `root`.
    ///
    /// The directory may already exist; an existing log file is appended to,
    /// never truncated.
    pub fn prepare(root: impl AsRef<Path>, timestamp: RunTimestamp) -> Result<Self> {
        let id = timestamp.to_string();
        let log_dir = root.as_ref().join(LOGS_DIR_NAME).join(&id);

        fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
            path: log_dir.clone(),
            source,
        })?;

        let log_file = log_dir.join(format!("{id}.log"));
        open_append(&log_file)?;

        Ok(Self {
            timestamp,
            log_dir,
            log_file,
        })
    }

    pub fn timestamp(&self) -> RunTimestamp {
        self.timestamp
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Build a subscriber appending records at `level` and above to this
    /// run's file. Nothing is installed.
    pub fn subscriber(&self, level: Level) -> Result<impl Subscriber + Send + Sync + 'static> {
        let file = open_append(&self.log_file)?;

        Ok(tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .event_format(RunLineFormat::new())
            .with_writer(Mutex::new(file))
            .finish())
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    fn sample_timestamp() -> RunTimestamp {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(13, 45, 10, 789)
            .unwrap();
        RunTimestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_formats_with_underscores_and_drops_subseconds() {
        let ts = sample_timestamp();
        assert_eq!(ts.to_string(), "2024_05_01_13_45_10");
        assert_eq!(ts.datetime().nanosecond(), 0);
    }

    #[test]
    fn prepare_lays_out_dir_and_file_by_timestamp() {
        let root = tempfile::tempdir().unwrap();
        let run = LogRun::prepare(root.path(), sample_timestamp()).unwrap();

        let expected_dir = root.path().join("logs").join("2024_05_01_13_45_10");
        assert_eq!(run.log_dir(), expected_dir);
        assert_eq!(run.log_file(), expected_dir.join("2024_05_01_13_45_10.log"));
        assert!(run.log_file().is_file());
    }

    #[test]
    fn prepare_reports_unwritable_root() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("logs");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = LogRun::prepare(root.path(), sample_timestamp()).unwrap_err();
        assert!(matches!(err, LoggingError::CreateDir { .. }), "got {err:?}");
    }
}
