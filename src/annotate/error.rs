// src/annotate/error.rs

use std::fmt;

use thiserror::Error;

use super::annotate;
use super::context::{FailureContext, SourceLocation};

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error enriched with the location it was raised at.
///
/// `Display` yields the rendered message produced by [`annotate`]. When built
/// with [`AnnotatedError::with_source`] or [`AnnotatedError::from_anyhow`],
/// the wrapped error stays reachable through `source()`.
#[derive(Debug, Error)]
#[error("{rendered}")]
pub struct AnnotatedError {
    original_message: String,
    location: Option<SourceLocation>,
    rendered: String,
    #[source]
    source: Option<BoxedSource>,
}

impl AnnotatedError {
    /// Annotate a raw error value (anything with a `Display`).
    pub fn new(error: impl fmt::Display, ctx: &FailureContext) -> Self {
        Self::build(error.to_string(), ctx, None)
    }

    /// Annotate an error and keep it as the `source()` of the result.
    pub fn with_source<E>(error: E, ctx: &FailureContext) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::build(message, ctx, Some(Box::new(error)))
    }

    pub fn from_anyhow(error: anyhow::Error, ctx: &FailureContext) -> Self {
        let message = error.to_string();
        Self::build(message, ctx, Some(error.into()))
    }

    /// Annotate `error` with the caller's location.
    #[track_caller]
    pub fn here(error: impl fmt::Display) -> Self {
        Self::new(error, &FailureContext::capture())
    }

    fn build(original_message: String, ctx: &FailureContext, source: Option<BoxedSource>) -> Self {
        let rendered = annotate(&original_message, ctx);
        Self {
            original_message,
            location: ctx.frame().cloned(),
            rendered,
            source,
        }
    }

    pub fn original_message(&self) -> &str {
        &self.original_message
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn display_is_the_rendered_message() {
        let err = AnnotatedError::new("bad input", &FailureContext::at("lib.rs", 7));

        assert_eq!(
            err.to_string(),
            "Error occurred in source [lib.rs] line number [7] error message[bad input]"
        );
        assert_eq!(err.rendered(), err.to_string());
        assert_eq!(err.original_message(), "bad input");
        assert_eq!(err.location(), Some(&SourceLocation::new("lib.rs", 7)));
    }

    #[test]
    fn new_has_no_source() {
        let err = AnnotatedError::new("x", &FailureContext::none());
        assert!(err.source().is_none());
        assert!(err.location().is_none());
    }

    #[test]
    fn with_source_keeps_the_wrapped_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.toml");
        let err = AnnotatedError::with_source(io_err, &FailureContext::at("cfg.rs", 3));

        let source = err.source().expect("source kept");
        assert_eq!(source.to_string(), "missing.toml");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn from_anyhow_uses_the_outermost_message() {
        let inner = anyhow::anyhow!("connection refused").context("loading profile");
        let err = AnnotatedError::from_anyhow(inner, &FailureContext::at("net.rs", 12));

        assert_eq!(err.original_message(), "loading profile");
        assert!(err.source().is_some());
    }
}
