#![allow(dead_code)]

use std::path::Path;

use faultline::{AnnotateExt, AnnotatedError};

pub use faultline_test_utils::{ScratchRun, expected_rendering};

/// Read `path`, annotating a failure at the `annotate_err` call in here.
///
/// Also returns the line of that call.
pub fn read_config(path: &Path) -> (Result<String, AnnotatedError>, u32) {
    (std::fs::read_to_string(path).annotate_err(), line!())
}
