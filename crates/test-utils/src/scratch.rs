use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use faultline::logging::{LogRun, RunTimestamp, LOGS_DIR_NAME};
use tempfile::TempDir;
use tracing::Level;

/// A `LogRun` rooted in a temp dir that is removed on drop.
pub struct ScratchRun {
    root: TempDir,
    run: LogRun,
}

impl ScratchRun {
    pub fn new() -> Result<Self> {
        Self::at(RunTimestamp::now())
    }

    pub fn at(timestamp: RunTimestamp) -> Result<Self> {
        let root = tempfile::tempdir().context("creating scratch root")?;
        let run = LogRun::prepare(root.path(), timestamp)?;
        Ok(Self { root, run })
    }

    /// Parse `YYYY-MM-DD HH:MM:SS` into a run timestamp.
    pub fn timestamp(s: &str) -> Result<RunTimestamp> {
        let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("parsing timestamp {s:?}"))?;
        Ok(RunTimestamp::from_datetime(dt))
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn run(&self) -> &LogRun {
        &self.run
    }

    /// Run `f` with this run's subscriber as the thread default.
    pub fn with_subscriber<T>(&self, level: Level, f: impl FnOnce() -> T) -> Result<T> {
        let subscriber = self.run.subscriber(level)?;
        Ok(tracing::subscriber::with_default(subscriber, f))
    }

    pub fn read_lines(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(self.run.log_file())
            .with_context(|| format!("reading {:?}", self.run.log_file()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    /// Every entry under `<root>/logs`, sorted.
    pub fn run_dirs(&self) -> Result<Vec<PathBuf>> {
        let logs = self.root().join(LOGS_DIR_NAME);
        let mut entries = Vec::new();
        for entry in fs::read_dir(&logs).with_context(|| format!("reading dir {:?}", logs))? {
            entries.push(entry?.path());
        }
        entries.sort();
        Ok(entries)
    }
}
