// src/logging/config.rs

use std::env;
use std::path::{Path, PathBuf};

use tracing::Level;

/// Environment variable read by [`RunLoggerConfig::from_env`].
pub const LOG_LEVEL_ENV: &str = "FAULTLINE_LOG";

/// Settings for [`initialize_run`](super::initialize_run).
///
/// Nothing here is read implicitly: the default config writes `info` and
/// above under the installation root.
#[derive(Debug, Clone)]
pub struct RunLoggerConfig {
    root_dir: Option<PathBuf>,
    level: Level,
}

impl Default for RunLoggerConfig {
    fn default() -> Self {
        Self {
            root_dir: None,
            level: Level::INFO,
        }
    }
}

impl RunLoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with the level taken from `FAULTLINE_LOG`, if set and valid.
    pub fn from_env() -> Self {
        let level = level_from_env_value(env::var(LOG_LEVEL_ENV).ok().as_deref());
        Self::default().with_level(level)
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The configured root, or [`default_root_dir`] when none was set.
    pub fn resolve_root_dir(&self) -> PathBuf {
        self.root_dir.clone().unwrap_or_else(default_root_dir)
    }
}

/// Installation root: one level above the directory holding the executable.
///
/// Falls back to the current directory, then to `.`.
pub fn default_root_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn level_from_env_value(value: Option<&str>) -> Level {
    value.and_then(parse_level_str).unwrap_or(Level::INFO)
}

pub fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
