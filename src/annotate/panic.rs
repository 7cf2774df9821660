// src/annotate/panic.rs

//! Panic capture.
//!
//! A panic is the closest thing Rust has to a propagating exception with a
//! traceback. [`catch_failure`] runs a closure under `catch_unwind` and turns
//! a panic into an [`AnnotatedError`] pointing at the panicking line.
//!
//! The location is only available to the panic hook, so a process-wide hook
//! is installed on first use. It records into thread-local state while a
//! `catch_failure` is active on the panicking thread and otherwise defers to
//! whichever hook was installed before it.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::panic::{self, UnwindSafe};
use std::sync::Once;

use tracing::debug;

use super::context::{FailureContext, SourceLocation};
use super::error::AnnotatedError;

#[derive(Debug, Clone)]
struct PanicRecord {
    location: Option<SourceLocation>,
    message: String,
}

thread_local! {
    static CATCH_DEPTH: Cell<usize> = const { Cell::new(0) };
    static LAST_PANIC: RefCell<Option<PanicRecord>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let catching = CATCH_DEPTH.try_with(Cell::get).unwrap_or(0) > 0;
            if !catching {
                previous(info);
                return;
            }

            let record = PanicRecord {
                location: info.location().map(SourceLocation::from),
                message: payload_message(info.payload()),
            };
            let _ = LAST_PANIC.try_with(|slot| *slot.borrow_mut() = Some(record));
        }));
    });
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Decrements the catch depth even if `catch_unwind` itself unwinds.
struct CatchGuard;

impl CatchGuard {
    fn enter() -> Self {
        CATCH_DEPTH.with(|depth| depth.set(depth.get() + 1));
        CatchGuard
    }
}

impl Drop for CatchGuard {
    fn drop(&mut self) {
        let _ = CATCH_DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

pub(crate) fn last_panic_location() -> Option<SourceLocation> {
    LAST_PANIC
        .try_with(|slot| slot.borrow().as_ref().and_then(|r| r.location.clone()))
        .ok()
        .flatten()
}

/// Run `f`, converting a panic into an [`AnnotatedError`].
///
/// Does nothing useful under `panic = "abort"`.
pub fn catch_failure<F, R>(f: F) -> Result<R, AnnotatedError>
where
    F: FnOnce() -> R + UnwindSafe,
{
    install_hook();
    LAST_PANIC.with(|slot| *slot.borrow_mut() = None);

    let outcome = {
        let _guard = CatchGuard::enter();
        panic::catch_unwind(f)
    };

    match outcome {
        Ok(value) => Ok(value),
        Err(payload) => {
            let recorded = LAST_PANIC.with(|slot| slot.borrow().clone());
            let (ctx, message) = match recorded {
                Some(record) => (FailureContext::from_frame(record.location), record.message),
                // Hook was replaced after ours; the location is lost.
                None => (FailureContext::none(), payload_message(&*payload)),
            };
            let err = AnnotatedError::new(message, &ctx);
            debug!(error = %err, "caught panic");
            Err(err)
        }
    }
}
