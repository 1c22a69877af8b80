use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::error::{MismatchError, MismatchKind};
use crate::subject::render;

/// The outcome of running a closure that may panic.
///
/// ```
/// use assert_that::assert_that_code;
///
/// let people = vec!["Lolek", "Bolek"];
/// assert_that_code(|| {
///     let _person = people[10];
/// })
/// .panics()
/// .has_message("index out of bounds: the len is 2 but the index is 10");
/// ```
#[derive(Debug)]
pub struct CodeSubject {
    panic_message: Option<String>,
    description: Option<String>,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

// Wraps the current hook once; it stays silent while this thread captures
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `code`, capturing the message of any panic it raises.
///
/// Panics raised by `code` are not reported on stderr. Panics on other
/// threads, and outside of `code`, are reported as usual.
pub fn assert_that_code<F: FnOnce()>(code: F) -> CodeSubject {
    install_quiet_hook();
    let outer = CAPTURING.with(|capturing| capturing.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(code));
    CAPTURING.with(|capturing| capturing.set(outer));

    let panic_message = outcome
        .err()
        .map(|payload| panic_message(payload.as_ref()));
    CodeSubject {
        panic_message,
        description: None,
    }
}

/// Fails the current test because the code under test did not panic.
#[track_caller]
pub fn fail_because_no_panic(expected: &str) -> ! {
    MismatchError::new(MismatchKind::Panic, format!("panic: {}", expected), "no panic").raise()
}

impl CodeSubject {
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn panic_message(&self) -> Option<&str> {
        self.panic_message.as_deref()
    }

    #[track_caller]
    pub fn panics(&self) -> &Self {
        if self.panic_message.is_none() {
            self.fail("panic", "no panic".to_string());
        }
        self
    }

    #[track_caller]
    pub fn does_not_panic(&self) -> &Self {
        if let Some(message) = &self.panic_message {
            self.fail("no panic", format!("panic: {}", render(message)));
        }
        self
    }

    #[track_caller]
    pub fn has_message(&self, expected: &str) -> &Self {
        match &self.panic_message {
            Some(message) if message == expected => {}
            Some(message) => self.fail(
                &format!("panic: {}", render(expected)),
                format!("panic: {}", render(message)),
            ),
            None => self.fail(&format!("panic: {}", render(expected)), "no panic".to_string()),
        }
        self
    }

    #[track_caller]
    pub fn has_message_containing(&self, fragment: &str) -> &Self {
        match &self.panic_message {
            Some(message) if message.contains(fragment) => {}
            Some(message) => self.fail(
                &format!("panic containing {}", render(fragment)),
                format!("panic: {}", render(message)),
            ),
            None => self.fail(
                &format!("panic containing {}", render(fragment)),
                "no panic".to_string(),
            ),
        }
        self
    }

    #[track_caller]
    fn fail(&self, expected: &str, actual: String) {
        let error = MismatchError::new(MismatchKind::Panic, expected, actual);
        match &self.description {
            Some(description) => error.with_subject(description.clone()).raise(),
            None => error.raise(),
        }
    }
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .map(|s| s.as_str())
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("Box<dyn Any>")
        .to_string()
}
