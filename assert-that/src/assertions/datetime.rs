use std::fmt;

use chrono::{Datelike, Timelike};

use crate::error::{MismatchError, MismatchKind};
use crate::subject::{Subject, render};

/// Fields dropped before two date-times are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precision {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Precision {
    fn ignoring(self) -> &'static str {
        match self {
            Precision::Seconds => "ignoring millis",
            Precision::Minutes => "ignoring seconds",
            Precision::Hours => "ignoring minutes",
            Precision::Days => "ignoring hours",
        }
    }
}

/// Comparable fields: year, day of year, hour, minute, second.
fn truncate<T: Datelike + Timelike>(value: &T, precision: Precision) -> (i32, u32, u32, u32, u32) {
    let (hour, minute, second) = match precision {
        Precision::Seconds => (value.hour(), value.minute(), value.second()),
        Precision::Minutes => (value.hour(), value.minute(), 0),
        Precision::Hours => (value.hour(), 0, 0),
        Precision::Days => (0, 0, 0),
    };
    (value.year(), value.ordinal(), hour, minute, second)
}

/// Coarse equality for chrono values that carry both a date and a time
/// (`NaiveDateTime`, `DateTime<Tz>`).
///
/// Fields are compared as the values report them, so two `DateTime`s in
/// different offsets compare by their local wall-clock fields.
///
/// ```
/// use assert_that::prelude::*;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let first = day.and_hms_milli_opt(0, 0, 1, 0).unwrap();
/// let second = day.and_hms_milli_opt(0, 0, 1, 456).unwrap();
///
/// assert_that(&first).is_equal_to_ignoring_millis(&second);
/// ```
pub trait DateTimeAssertion<T> {
    fn is_equal_to_ignoring_millis(&self, other: &T) -> &Self;
    fn is_equal_to_ignoring_seconds(&self, other: &T) -> &Self;
    fn is_equal_to_ignoring_minutes(&self, other: &T) -> &Self;

    /// Same calendar day.
    fn is_equal_to_ignoring_hours(&self, other: &T) -> &Self;
}

impl<T: Datelike + Timelike + fmt::Debug> DateTimeAssertion<T> for Subject<'_, T> {
    #[track_caller]
    fn is_equal_to_ignoring_millis(&self, other: &T) -> &Self {
        self.compare_at(other, Precision::Seconds)
    }

    #[track_caller]
    fn is_equal_to_ignoring_seconds(&self, other: &T) -> &Self {
        self.compare_at(other, Precision::Minutes)
    }

    #[track_caller]
    fn is_equal_to_ignoring_minutes(&self, other: &T) -> &Self {
        self.compare_at(other, Precision::Hours)
    }

    #[track_caller]
    fn is_equal_to_ignoring_hours(&self, other: &T) -> &Self {
        self.compare_at(other, Precision::Days)
    }
}

impl<T: Datelike + Timelike + fmt::Debug> Subject<'_, T> {
    #[track_caller]
    fn compare_at(&self, other: &T, precision: Precision) -> &Self {
        if truncate(self.actual(), precision) != truncate(other, precision) {
            self.report(
                MismatchError::new(MismatchKind::DateTime, render(other), render(self.actual()))
                    .with_detail(precision.ignoring()),
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn truncation_keeps_coarser_fields() {
        let value = NaiveDate::from_ymd_opt(2000, 2, 1)
            .unwrap()
            .and_hms_milli_opt(13, 45, 30, 250)
            .unwrap();

        assert_eq!(truncate(&value, Precision::Seconds), (2000, 32, 13, 45, 30));
        assert_eq!(truncate(&value, Precision::Minutes), (2000, 32, 13, 45, 0));
        assert_eq!(truncate(&value, Precision::Hours), (2000, 32, 13, 0, 0));
        assert_eq!(truncate(&value, Precision::Days), (2000, 32, 0, 0, 0));
    }
}
