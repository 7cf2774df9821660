pub mod scratch;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

pub use scratch::ScratchRun;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Do not call this from a test binary that also calls
/// `faultline::initialize_run`: both install the global subscriber.
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// The exact line `annotate` renders for `file`, `line` and `message`.
pub fn expected_rendering(file: &str, line: u32, message: &str) -> String {
    format!("Error occurred in source [{file}] line number [{line}] error message[{message}]")
}
