use std::fmt;

use crate::error::MismatchKind;
use crate::subject::{Subject, render};

/// Checks for `Option` subjects.
///
/// ```
/// use assert_that::prelude::*;
///
/// let optional = Some("Test");
/// assert_that(&optional).is_some().contains("Test");
/// ```
pub trait OptionAssertion<T> {
    fn is_some(&self) -> &Self;
    fn is_none(&self) -> &Self;

    /// The option is `Some` and its value equals `expected`.
    fn contains<E: fmt::Debug>(&self, expected: E) -> &Self
    where
        T: PartialEq<E>;
}

impl<T: fmt::Debug> OptionAssertion<T> for Subject<'_, Option<T>> {
    #[track_caller]
    fn is_some(&self) -> &Self {
        if self.actual().is_none() {
            self.fail(MismatchKind::Presence, "Some(_)", "None");
        }
        self
    }

    #[track_caller]
    fn is_none(&self) -> &Self {
        if let Some(value) = self.actual() {
            self.fail(MismatchKind::Presence, "None", format!("Some({})", render(value)));
        }
        self
    }

    #[track_caller]
    fn contains<E: fmt::Debug>(&self, expected: E) -> &Self
    where
        T: PartialEq<E>,
    {
        let matches = match self.actual() {
            Some(value) => *value == expected,
            None => false,
        };
        if !matches {
            self.fail(
                MismatchKind::Value,
                format!("Some({})", render(&expected)),
                render(self.actual()),
            );
        }
        self
    }
}
