use std::hint::black_box;
use std::thread;

use faultline::{FailureContext, catch_failure};
use faultline_test_utils::init_tracing;

#[test]
fn integer_division_by_zero_reports_the_dividing_line() {
    init_tracing();
    let divisor = black_box(0_i32);
    let (result, line) = (catch_failure(|| 10 / divisor), line!());

    let err = result.unwrap_err();
    assert_eq!(err.original_message(), "attempt to divide by zero");
    assert_eq!(
        err.to_string(),
        format!(
            "Error occurred in source [{}] line number [{line}] error message[attempt to divide by zero]",
            file!()
        )
    );
}

#[test]
fn successful_closures_return_their_value() {
    let result = catch_failure(|| 6 * 7);
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn formatted_panic_messages_are_kept() {
    init_tracing();
    let id = 17;
    let err = catch_failure(|| -> u8 { panic!("job {id} lost its lease") }).unwrap_err();
    assert_eq!(err.original_message(), "job 17 lost its lease");
}

#[test]
fn last_panic_exposes_the_caught_frame() {
    let (result, line) = (catch_failure(|| -> u8 { panic!("boom") }), line!());
    assert!(result.is_err());

    let ctx = FailureContext::last_panic();
    let frame = ctx.frame().unwrap();
    assert_eq!(frame.file(), file!());
    assert_eq!(frame.line(), line);
}

#[test]
fn last_panic_is_per_thread() {
    let _ = catch_failure(|| -> u8 { panic!("here") });

    let other = thread::spawn(|| FailureContext::last_panic().is_active())
        .join()
        .unwrap();
    assert!(!other);
}
