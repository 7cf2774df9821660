// src/errors.rs

//! Crate-wide error types.
//!
//! [`AnnotatedError`] is the one error kind handed to calling code at failure
//! sites. [`LoggingError`] only covers setting up the run logger.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::annotate::AnnotatedError;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path:?}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("run logger already initialized, writing to {log_file:?}")]
    AlreadyInitialized { log_file: PathBuf },

    #[error("another global tracing subscriber is already installed")]
    SubscriberAlreadySet,

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use tracing::subscriber::{NoSubscriber, set_global_default};

    use super::*;

    #[test]
    fn subscriber_error_keeps_its_cause() {
        let _ = set_global_default(NoSubscriber::default());
        let cause = set_global_default(NoSubscriber::default()).unwrap_err();

        let err = LoggingError::from(cause);
        assert!(matches!(err, LoggingError::Subscriber(_)));
        assert!(err.source().is_some());
    }
}
