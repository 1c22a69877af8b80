use std::fmt;

use crate::error::MismatchKind;
use crate::subject::{Subject, render};

/// Equality checks, available for every `Debug` subject.
pub trait EqualityAssertion<T: ?Sized> {
    /// ```
    /// use assert_that::prelude::*;
    ///
    /// let name = String::from("John");
    /// assert_that(&name).is_equal_to("John");
    /// ```
    fn is_equal_to<E>(&self, expected: &E) -> &Self
    where
        T: PartialEq<E>,
        E: fmt::Debug + ?Sized;

    fn is_not_equal_to<E>(&self, other: &E) -> &Self
    where
        T: PartialEq<E>,
        E: fmt::Debug + ?Sized;
}

impl<T: fmt::Debug + ?Sized> EqualityAssertion<T> for Subject<'_, T> {
    #[track_caller]
    fn is_equal_to<E>(&self, expected: &E) -> &Self
    where
        T: PartialEq<E>,
        E: fmt::Debug + ?Sized,
    {
        if self.actual() != expected {
            self.fail(MismatchKind::Value, render(expected), render(self.actual()));
        }
        self
    }

    #[track_caller]
    fn is_not_equal_to<E>(&self, other: &E) -> &Self
    where
        T: PartialEq<E>,
        E: fmt::Debug + ?Sized,
    {
        if self.actual() == other {
            self.fail(
                MismatchKind::Equality,
                format!("!= {}", render(other)),
                render(self.actual()),
            );
        }
        self
    }
}

/// Ordering checks for `PartialOrd` subjects.
pub trait ComparisonAssertion<T: ?Sized> {
    fn is_less_than(&self, bound: &T) -> &Self;
    fn is_less_than_or_equal_to(&self, bound: &T) -> &Self;
    fn is_greater_than(&self, bound: &T) -> &Self;
    fn is_greater_than_or_equal_to(&self, bound: &T) -> &Self;

    /// Inclusive on both ends.
    fn is_between(&self, low: &T, high: &T) -> &Self;
}

impl<T: PartialOrd + fmt::Debug + ?Sized> ComparisonAssertion<T> for Subject<'_, T> {
    #[track_caller]
    fn is_less_than(&self, bound: &T) -> &Self {
        self.compare(self.actual() < bound, "<", bound)
    }

    #[track_caller]
    fn is_less_than_or_equal_to(&self, bound: &T) -> &Self {
        self.compare(self.actual() <= bound, "<=", bound)
    }

    #[track_caller]
    fn is_greater_than(&self, bound: &T) -> &Self {
        self.compare(self.actual() > bound, ">", bound)
    }

    #[track_caller]
    fn is_greater_than_or_equal_to(&self, bound: &T) -> &Self {
        self.compare(self.actual() >= bound, ">=", bound)
    }

    #[track_caller]
    fn is_between(&self, low: &T, high: &T) -> &Self {
        let actual = self.actual();
        if !(low <= actual && actual <= high) {
            self.fail(
                MismatchKind::Comparison,
                format!("{}..={}", render(low), render(high)),
                render(actual),
            );
        }
        self
    }
}

impl<T: fmt::Debug + ?Sized> Subject<'_, T> {
    #[track_caller]
    fn compare(&self, holds: bool, op: &str, bound: &T) -> &Self {
        if !holds {
            self.fail(
                MismatchKind::Comparison,
                format!("{} {}", op, render(bound)),
                render(self.actual()),
            );
        }
        self
    }
}
