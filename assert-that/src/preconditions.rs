//! Argument checks for test helpers and fixtures.
//!
//! Each check returns its input so it can wrap an expression inline, and
//! panics with a fixed message when the argument is unusable.

use std::fmt;

pub const NONE_MESSAGE: &str = "argument expected not to be none";
pub const EMPTY_MESSAGE: &str = "argument expected not to be empty";

/// ```
/// use assert_that::preconditions::check_not_empty;
///
/// let text = check_not_empty("text");
/// assert_eq!(text, "text");
/// ```
#[track_caller]
pub fn check_not_empty<S: AsRef<str> + ?Sized>(text: &S) -> &S {
    if text.as_ref().is_empty() {
        panic!("{}", EMPTY_MESSAGE);
    }
    text
}

#[track_caller]
pub fn check_not_none_or_empty<S: AsRef<str>>(text: Option<S>) -> S {
    match text {
        Some(text) => {
            check_not_empty(text.as_ref());
            text
        }
        None => panic!("{}", NONE_MESSAGE),
    }
}

#[track_caller]
pub fn check_argument(condition: bool, message: impl fmt::Display) {
    if !condition {
        panic!("{}", message);
    }
}
