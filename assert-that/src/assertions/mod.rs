//! Capability traits, one per subject shape.

mod equality;
mod iterable;
mod multimap;
mod option;
mod panic;
mod path;
mod result;
mod string;

#[cfg(feature = "chrono")]
mod datetime;

pub use equality::{ComparisonAssertion, EqualityAssertion};
pub use iterable::{Elements, IterableAssertion};
pub use multimap::{Multimap, MultimapAssertion};
pub use option::OptionAssertion;
pub use panic::{CodeSubject, assert_that_code, fail_because_no_panic};
pub use path::{PathAssertion, content_of};
pub use result::ResultAssertion;
pub use string::StringAssertion;

#[cfg(feature = "chrono")]
pub use datetime::DateTimeAssertion;
