// Common test utilities

use std::panic::{self, AssertUnwindSafe};

/// Captures the panic message from a function that should panic
pub fn capture_panic_message<F: FnOnce()>(f: F) -> String {
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    let err = result.unwrap_err();
    err.downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap()
        .to_string()
}

/// Runs `f` with file locations in snapshots replaced by `(<location>)`
#[allow(dead_code)]
pub fn with_redacted_locations<R>(f: impl FnOnce() -> R) -> R {
    let mut settings = insta::Settings::clone_current();
    settings.add_filter(r"\([^()\s]+\.rs:\d+\)", "(<location>)");
    settings.bind(f)
}
