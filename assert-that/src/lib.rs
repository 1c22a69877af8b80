//! # assert-that: Fluent Assertions for Tests
//!
//! `assert-that` provides chainable, readable assertions. Wrap a value with
//! [`assert_that`], then chain the checks that matter. When a check fails the
//! test panics with a message showing what was checked, where, and the actual
//! and expected values.
//!
//! # Table of Contents
//!
//! - [Quick Start](#quick-start)
//! - [Subjects and Capabilities](#subjects-and-capabilities)
//! - [Objects](#objects)
//! - [Strings](#strings)
//! - [Collections](#collections)
//! - [Multimaps](#multimaps)
//! - [Options and Results](#options-and-results)
//! - [Date-times](#date-times)
//! - [Files](#files)
//! - [Panics](#panics)
//! - [Custom Assertions](#custom-assertions)
//! - [Soft Assertions](#soft-assertions)
//! - [Error Messages](#error-messages)
//!
//! # Quick Start
//!
//! ```toml
//! [dev-dependencies]
//! assert-that = "0.1"
//! ```
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! let names = vec!["Mike".to_string(), "Nick".to_string(), "Betty".to_string()];
//!
//! assert_that(&names).has_size(3).contains(&["Mike", "Betty"]);
//! assert_that(&names[0]).is_equal_to_ignoring_case("MIKE");
//! ```
//!
//! # Subjects and Capabilities
//!
//! [`assert_that`] borrows the value and returns a [`Subject`]. The checks
//! come from capability traits, each implemented for the subject shapes it
//! understands. Bring them all into scope with the [`prelude`].
//!
//! The [`assert_that!`] macro does the same and also names the subject after
//! the expression, so failures read `` --> `user.age` `` instead of pointing
//! at an anonymous value:
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! struct User { age: u32 }
//! let user = User { age: 30 };
//!
//! assert_that!(user.age).is_greater_than(&18).is_less_than(&65);
//! ```
//!
//! # Objects
//!
//! Any `Debug` value gets [`EqualityAssertion`]; `PartialOrd` values get
//! [`ComparisonAssertion`]:
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! assert_that(&Point { x: 1, y: 2 }).is_equal_to(&Point { x: 1, y: 2 });
//! assert_that(&7_u32).is_between(&1, &10);
//! ```
//!
//! # Strings
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! assert_that("John")
//!     .is_equal_to_ignoring_case("JOHN")
//!     .starts_with("Jo")
//!     .has_length(4);
//! ```
//!
//! With the `regex` feature (enabled by default):
//!
//! ```rust
//! # #[cfg(feature = "regex")]
//! # {
//! use assert_that::prelude::*;
//!
//! assert_that("alice@company.com").matches(r"@company\.com$");
//! # }
//! ```
//!
//! # Collections
//!
//! [`IterableAssertion`] covers anything implementing [`Elements`]: vectors,
//! slices, arrays, `VecDeque`, `HashSet` and `BTreeSet`.
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! let scores = vec![10_u32, 20, 30];
//!
//! assert_that(&scores)
//!     .is_not_empty()
//!     .contains_exactly(&[10_u32, 20, 30])
//!     .all_satisfy("are positive", |score| *score > 0);
//! ```
//!
//! # Multimaps
//!
//! `HashMap<K, Vec<V>>` and `BTreeMap<K, Vec<V>>` act as multimaps through
//! [`Multimap`]:
//!
//! ```rust
//! use assert_that::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut teams: HashMap<&str, Vec<&str>> = HashMap::new();
//! teams.entry("Spurs").or_default().push("Tony Parker");
//!
//! assert_that(&teams)
//!     .contains_keys(&["Spurs"])
//!     .contains_entries(&[("Spurs", "Tony Parker")]);
//! ```
//!
//! # Options and Results
//!
//! ```rust
//! use assert_that::prelude::*;
//!
//! assert_that(&Some("Test")).is_some().contains("Test");
//!
//! let parsed: Result<i32, _> = "42".parse::<i32>();
//! assert_that(&parsed).is_ok().contains_ok(42_i32);
//! ```
//!
//! # Date-times
//!
//! With the `chrono` feature (enabled by default), [`DateTimeAssertion`]
//! compares date-times at a coarser precision:
//!
//! ```rust
//! # #[cfg(feature = "chrono")]
//! # {
//! use assert_that::prelude::*;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
//! let late = day.and_hms_milli_opt(23, 59, 59, 999).unwrap();
//! let midnight = day.and_hms_milli_opt(0, 0, 0, 0).unwrap();
//!
//! assert_that(&late).is_equal_to_ignoring_hours(&midnight);
//! # }
//! ```
//!
//! # Files
//!
//! [`PathAssertion`] checks `Path` and `PathBuf` subjects against the file
//! system, and [`content_of`] reads a file for string assertions.
//!
//! ```rust,no_run
//! use assert_that::prelude::*;
//! use std::path::Path;
//!
//! let report = Path::new("/tmp/report.txt");
//! assert_that(report).exists().is_file().has_content("ok\n");
//! assert_that(&content_of(report)).ends_with("\n");
//! ```
//!
//! # Panics
//!
//! ```rust
//! use assert_that::assert_that_code;
//!
//! assert_that_code(|| panic!("boom"))
//!     .panics()
//!     .has_message("boom");
//! ```
//!
//! # Custom Assertions
//!
//! `#[derive(Assertions)]` generates a `<Type>Assert` helper with one check
//! per field:
//!
//! ```rust
//! use assert_that::Assertions;
//!
//! #[derive(Debug, Assertions)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let john = Person { name: "John".to_string(), age: 23 };
//! PersonAssert::assert_that(&john).has_age(23).has_name("John");
//! ```
//!
//! For checks the derive cannot express, write a capability trait for
//! `Subject<'_, YourType>` and call [`Subject::fail`] on mismatch.
//!
//! # Soft Assertions
//!
//! [`SoftAssertions`] collects every failure and reports them together:
//!
//! ```rust,should_panic
//! use assert_that::prelude::*;
//! use assert_that::SoftAssertions;
//!
//! let softly = SoftAssertions::new();
//! softly.assert_that(&1_i32).is_equal_to(&2_i32);
//! softly.assert_that("abc").ends_with("x");
//! softly.assert_all(); // panics: 2 mismatches
//! ```
//!
//! # Error Messages
//!
//! ```rust,should_panic
//! use assert_that::prelude::*;
//!
//! let age = 23_u32;
//! assert_that!(age).is_equal_to(&25);
//! // Error output:
//! // assert_that! failed:
//! //
//! // value mismatch:
//! //   --> `age` (src/lib.rs:226)
//! //   actual: 23
//! //   expected: 25
//! ```
//!
//! Long subject paths and values are shortened; see [`config`] for the
//! environment variables that control the limits.

pub use assert_that_macros::Assertions;

pub mod config;
mod error;
pub mod preconditions;
mod soft;
mod subject;

mod assertions;

#[cfg(feature = "regex")]
mod regex_cache;

pub use assertions::*;
pub use error::{MismatchError, MismatchKind, format_mismatches};
pub use soft::SoftAssertions;
pub use subject::Subject;

/// Starts an assertion on `actual`.
pub fn assert_that<T: ?Sized>(actual: &T) -> Subject<'_, T> {
    Subject::new(actual)
}

/// Starts an assertion on an expression, naming the subject after it.
///
/// ```
/// use assert_that::prelude::*;
///
/// let names = vec!["Lolek", "Bolek"];
/// assert_that!(names).has_size(2);
/// assert_that!(names.len()).is_equal_to(&2);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr $(,)?) => {
        $crate::Subject::new(&$actual).described_as(::std::stringify!($actual))
    };
}

/// Everything needed to write assertions.
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::{Subject, assert_that};
}

// Support functions for code generated by `#[derive(Assertions)]`
#[doc(hidden)]
pub mod __macro_support {
    use std::fmt;

    use crate::error::MismatchKind;
    use crate::subject::{Subject, render};

    #[track_caller]
    pub fn check_field<S, F, E>(subject: &Subject<'_, S>, field: &str, actual: &F, expected: &E)
    where
        S: ?Sized,
        F: PartialEq<E> + fmt::Debug + ?Sized,
        E: fmt::Debug + ?Sized,
    {
        if actual != expected {
            subject.fail_field(field, MismatchKind::Value, render(expected), render(actual));
        }
    }

    #[track_caller]
    pub fn check_flag<S: ?Sized>(subject: &Subject<'_, S>, field: &str, actual: bool, expected: bool) {
        if actual != expected {
            subject.fail_field(field, MismatchKind::Value, expected.to_string(), actual.to_string());
        }
    }
}
