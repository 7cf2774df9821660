// src/annotate/mod.rs

//! Error annotation.
//!
//! Turns an error plus the site it was raised at into a single readable line:
//!
//! ```text
//! Error occurred in source [<file>] line number [<line>] error message[<original>]
//! ```
//!
//! The site comes from an explicit [`FailureContext`]. When the context has no
//! frame the sentinel [`NO_ACTIVE_FAILURE`] and line `0` are rendered instead,
//! so the output always names a location and the original message.

pub mod context;
pub mod error;
pub mod panic;

use std::fmt;

pub use context::{FailureContext, NO_ACTIVE_FAILURE, SourceLocation};
pub use error::AnnotatedError;
pub use panic::catch_failure;

/// Render `original_error` together with the failure site held by `ctx`.
pub fn annotate(original_error: impl fmt::Display, ctx: &FailureContext) -> String {
    let (file, line) = match ctx.frame() {
        Some(frame) => (frame.file(), frame.line()),
        None => (NO_ACTIVE_FAILURE, 0),
    };

    format!("Error occurred in source [{file}] line number [{line}] error message[{original_error}]")
}

/// Annotate the error side of a `Result` with the call site.
pub trait AnnotateExt<T> {
    fn annotate_err(self) -> Result<T, AnnotatedError>;
}

impl<T, E> AnnotateExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn annotate_err(self) -> Result<T, AnnotatedError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(AnnotatedError::with_source(error, &FailureContext::capture())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_file_line_and_message() {
        let ctx = FailureContext::at("a.py", 10);
        assert_eq!(
            annotate("division by zero", &ctx),
            "Error occurred in source [a.py] line number [10] error message[division by zero]"
        );
    }

    #[test]
    fn falls_back_to_sentinel_without_a_frame() {
        let rendered = annotate("lost", &FailureContext::none());
        assert_eq!(
            rendered,
            "Error occurred in source [<no active failure>] line number [0] error message[lost]"
        );
    }

    #[test]
    fn empty_message_still_renders_location() {
        let rendered = annotate("", &FailureContext::at("x.rs", 1));
        assert!(rendered.contains("[x.rs]"));
        assert!(rendered.ends_with("error message[]"));
    }
}
