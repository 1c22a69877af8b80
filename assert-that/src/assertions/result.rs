use std::fmt;

use crate::error::MismatchKind;
use crate::subject::{Subject, render};

/// Checks for `Result` subjects.
pub trait ResultAssertion<T, E> {
    fn is_ok(&self) -> &Self;
    fn is_err(&self) -> &Self;

    fn contains_ok<V: fmt::Debug>(&self, expected: V) -> &Self
    where
        T: PartialEq<V>;

    /// The result is `Err` and the error displays exactly as `message`.
    ///
    /// ```
    /// use assert_that::prelude::*;
    ///
    /// let parsed: Result<u32, _> = "twelve".parse::<u32>();
    /// assert_that(&parsed).is_err().has_error_message("invalid digit found in string");
    /// ```
    fn has_error_message(&self, message: &str) -> &Self
    where
        E: fmt::Display;
}

impl<T: fmt::Debug, E: fmt::Debug> ResultAssertion<T, E> for Subject<'_, Result<T, E>> {
    #[track_caller]
    fn is_ok(&self) -> &Self {
        if let Err(err) = self.actual() {
            self.fail(MismatchKind::Outcome, "Ok(_)", format!("Err({})", render(err)));
        }
        self
    }

    #[track_caller]
    fn is_err(&self) -> &Self {
        if let Ok(value) = self.actual() {
            self.fail(MismatchKind::Outcome, "Err(_)", format!("Ok({})", render(value)));
        }
        self
    }

    #[track_caller]
    fn contains_ok<V: fmt::Debug>(&self, expected: V) -> &Self
    where
        T: PartialEq<V>,
    {
        let matches = match self.actual() {
            Ok(value) => *value == expected,
            Err(_) => false,
        };
        if !matches {
            self.fail(
                MismatchKind::Outcome,
                format!("Ok({})", render(&expected)),
                render(self.actual()),
            );
        }
        self
    }

    #[track_caller]
    fn has_error_message(&self, message: &str) -> &Self
    where
        E: fmt::Display,
    {
        match self.actual() {
            Err(err) => {
                let actual = err.to_string();
                if actual != message {
                    self.fail(MismatchKind::Outcome, render(message), render(&actual));
                }
            }
            Ok(value) => {
                self.fail(
                    MismatchKind::Outcome,
                    format!("Err with message {}", render(message)),
                    format!("Ok({})", render(value)),
                );
            }
        }
        self
    }
}
