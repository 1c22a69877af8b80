//! Procedural macro implementation for assert-that.
//!
//! Users should depend on the main `assert-that` crate, which re-exports
//! [`Assertions`](macro@Assertions).
//!
//! # Architecture Overview
//!
//! The derive runs in two phases:
//!
//! 1. **Parse** (`parse.rs`): validate the struct and classify its fields
//! 2. **Expand** (`expand.rs`): emit the `<Type>Assert` helper
//!
//! Generated code only talks to the runtime through
//! `::assert_that::__macro_support`, so failure reporting, soft assertions
//! and caller locations all behave like the hand-written assertions.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod parse;

/// Derives a fluent assertion helper for a struct with named fields.
///
/// For `struct Person` the derive generates `PersonAssert<'a>`, with the
/// same visibility as the struct:
///
/// | Field type | Generated checks                            |
/// |------------|---------------------------------------------|
/// | `String`   | `has_<field>(&self, expected: &str)`        |
/// | `bool`     | `is_<field>(&self)`, `is_not_<field>(&self)` |
/// | other `T`  | `has_<field>(&self, expected: T)`           |
///
/// Every check returns `&Self`, so checks chain. A mismatch fails with a
/// `value mismatch` naming the field, e.g. `` `Person.age` ``.
///
/// Other generated items:
///
/// - `assert_that(actual: &'a Person) -> PersonAssert<'a>`
/// - `described_as(self, description) -> Self` replaces `Person` in
///   failure paths
/// - `From<Subject<'a, Person>>`, so a subject created by
///   `SoftAssertions::assert_that` can be wrapped
///
/// # Field attributes
///
/// - `#[assertions(skip)]`: generate nothing for this field. Use it for
///   fields that are not `PartialEq + Debug`.
///
/// # Example
///
/// ```rust
/// use assert_that::Assertions;
///
/// #[derive(Debug, Assertions)]
/// struct Account {
///     owner: String,
///     balance: i64,
///     active: bool,
///     #[assertions(skip)]
///     cache: std::cell::Cell<u8>,
/// }
///
/// let account = Account {
///     owner: "Alice".to_string(),
///     balance: 120,
///     active: true,
///     cache: Default::default(),
/// };
///
/// AccountAssert::assert_that(&account)
///     .has_owner("Alice")
///     .has_balance(120)
///     .is_active();
/// ```
#[proc_macro_derive(Assertions, attributes(assertions))]
pub fn derive_assertions(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    let target = match parse::parse(&input) {
        Ok(target) => target,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    TokenStream::from(expand::expand(&target))
}
