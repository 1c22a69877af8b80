use std::cell::RefCell;

use crate::error::{MismatchError, format_mismatches};
use crate::subject::Subject;

/// Collects failures instead of raising them one by one.
///
/// Every subject created through [`SoftAssertions::assert_that`] records its
/// failures here and keeps going. [`assert_all`](SoftAssertions::assert_all)
/// raises everything collected as a single report.
///
/// ```
/// use assert_that::prelude::*;
/// use assert_that::SoftAssertions;
///
/// let softly = SoftAssertions::new();
/// softly.assert_that(&3_i32).is_equal_to(&4_i32);
/// softly.assert_that("Mike").starts_with("N");
///
/// assert_eq!(softly.errors().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SoftAssertions {
    errors: RefCell<Vec<MismatchError>>,
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assert_that<'a, T: ?Sized>(&'a self, actual: &'a T) -> Subject<'a, T> {
        Subject::collected_by(actual, self)
    }

    pub(crate) fn collect(&self, error: MismatchError) {
        tracing::debug!(kind = %error.kind(), line = error.line(), "soft assertion failed");
        self.errors.borrow_mut().push(error);
    }

    /// The failures collected so far, in the order they happened.
    pub fn errors(&self) -> Vec<MismatchError> {
        self.errors.borrow().clone()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    /// Raises every collected failure at once, if there are any.
    pub fn assert_all(self) {
        let errors = self.errors.into_inner();
        if !errors.is_empty() {
            panic!("{}", format_mismatches(&errors));
        }
    }
}
