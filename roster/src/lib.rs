//! People and the peers they know.
//!
//! A [`Person`] has a name, an age and an ordered list of peers. Equality,
//! ordering and hashing look at the name and the age only. A person keeps
//! its peers alive, and may list itself without leaking.
//!
//! With the `assertions` feature (enabled by default) `Person` and
//! [`PersonRecord`] derive fluent test helpers:
//!
//! ```rust
//! # #[cfg(feature = "assertions")]
//! # {
//! use roster::{Person, PersonAssert};
//!
//! let john = Person::new("John", 23);
//! PersonAssert::assert_that(&john).has_age(23).has_name("John");
//! # }
//! ```

mod person;

pub use person::{Person, PersonRecord, PersonRef};

#[cfg(feature = "assertions")]
pub use person::{PersonAssert, PersonRecordAssert};
