// src/annotate/context.rs

use std::fmt;
use std::panic::Location;

/// File identifier rendered when no failure is in flight.
pub const NO_ACTIVE_FAILURE: &str = "<no active failure>";

/// A file + line pair identifying where a failure was raised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: String,
    line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Handle to the currently propagating failure.
///
/// Rust has no ambient "exception in flight", so the failure site is passed
/// around explicitly. Most callers use [`FailureContext::capture`] at the
/// point where an error is turned into an [`AnnotatedError`]; tests inject a
/// fixed frame with [`FailureContext::at`].
///
/// [`AnnotatedError`]: crate::annotate::AnnotatedError
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureContext {
    frame: Option<SourceLocation>,
}

impl FailureContext {
    /// Record the caller's location as the failure site.
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn at(file: impl Into<String>, line: u32) -> Self {
        Self::from_frame(Some(SourceLocation::new(file, line)))
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::from_frame(Some(SourceLocation::from(location)))
    }

    /// A context with no failure in flight.
    pub fn none() -> Self {
        Self::default()
    }

    /// Frame of the last panic caught by [`catch_failure`] on this thread.
    ///
    /// Empty if no panic has been caught yet.
    ///
    /// [`catch_failure`]: crate::annotate::catch_failure
    pub fn last_panic() -> Self {
        Self::from_frame(super::panic::last_panic_location())
    }

    pub(crate) fn from_frame(frame: Option<SourceLocation>) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> Option<&SourceLocation> {
        self.frame.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.frame.is_some()
    }
}
