use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use crate::error::{MismatchError, MismatchKind};
use crate::subject::{Subject, render};

/// A collection whose elements can be inspected in iteration order.
///
/// Implement this for your own collection type to get
/// [`IterableAssertion`] on it.
pub trait Elements {
    type Item;

    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Elements for [T] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Elements for [T; N] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for Vec<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Elements for HashSet<T, S> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Elements for BTreeSet<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

/// Checks over the elements of a collection.
///
/// ```
/// use assert_that::prelude::*;
///
/// let names = vec!["Mike".to_string(), "Nick".to_string(), "Betty".to_string()];
/// assert_that(&names)
///     .is_not_empty()
///     .contains(&["Betty", "Mike"])
///     .contains_exactly(&["Mike", "Nick", "Betty"]);
/// ```
pub trait IterableAssertion<T> {
    fn is_empty(&self) -> &Self;
    fn is_not_empty(&self) -> &Self;
    fn has_size(&self, size: usize) -> &Self;

    /// Every expected value is present, in any order.
    fn contains<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>;

    fn does_not_contain<E: fmt::Debug>(&self, unexpected: &[E]) -> &Self
    where
        T: PartialEq<E>;

    /// Same elements, same order, nothing else.
    fn contains_exactly<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>;

    /// Same elements with the same multiplicities, in any order.
    fn contains_exactly_in_any_order<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>;

    fn all_satisfy<F>(&self, description: &str, predicate: F) -> &Self
    where
        F: Fn(&T) -> bool;
}

impl<C, T> IterableAssertion<T> for Subject<'_, C>
where
    C: Elements<Item = T> + ?Sized,
    T: fmt::Debug,
{
    #[track_caller]
    fn is_empty(&self) -> &Self {
        let items = self.items();
        if !items.is_empty() {
            self.fail(MismatchKind::Size, "[]", render(&items));
        }
        self
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        if self.items().is_empty() {
            self.fail(MismatchKind::Size, "non-empty collection", "[]");
        }
        self
    }

    #[track_caller]
    fn has_size(&self, size: usize) -> &Self {
        let items = self.items();
        if items.len() != size {
            self.report(
                MismatchError::new(MismatchKind::Size, size.to_string(), items.len().to_string())
                    .with_detail(format!("elements: {}", render(&items))),
            );
        }
        self
    }

    #[track_caller]
    fn contains<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>,
    {
        let items = self.items();
        let missing: Vec<&E> = expected
            .iter()
            .filter(|e| !items.iter().any(|item| *item == *e))
            .collect();
        if !missing.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("contains {}", render(expected)),
                    render(&items),
                )
                .with_detail(format!("missing: {}", render(&missing))),
            );
        }
        self
    }

    #[track_caller]
    fn does_not_contain<E: fmt::Debug>(&self, unexpected: &[E]) -> &Self
    where
        T: PartialEq<E>,
    {
        let items = self.items();
        let found: Vec<&E> = unexpected
            .iter()
            .filter(|e| items.iter().any(|item| *item == *e))
            .collect();
        if !found.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("does not contain {}", render(unexpected)),
                    render(&items),
                )
                .with_detail(format!("found: {}", render(&found))),
            );
        }
        self
    }

    #[track_caller]
    fn contains_exactly<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>,
    {
        let items = self.items();
        let same = items.len() == expected.len()
            && items.iter().zip(expected).all(|(item, e)| *item == e);
        if !same {
            self.fail(
                MismatchKind::Containment,
                format!("exactly {}", render(expected)),
                render(&items),
            );
        }
        self
    }

    #[track_caller]
    fn contains_exactly_in_any_order<E: fmt::Debug>(&self, expected: &[E]) -> &Self
    where
        T: PartialEq<E>,
    {
        let items = self.items();
        let mut unmatched: Vec<&T> = items.clone();
        let mut missing: Vec<&E> = Vec::new();
        for e in expected {
            match unmatched.iter().position(|item| *item == e) {
                Some(index) => {
                    unmatched.remove(index);
                }
                None => missing.push(e),
            }
        }
        if !missing.is_empty() || !unmatched.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("exactly {} in any order", render(expected)),
                    render(&items),
                )
                .with_detail(format!(
                    "missing: {}, unexpected: {}",
                    render(&missing),
                    render(&unmatched)
                )),
            );
        }
        self
    }

    #[track_caller]
    fn all_satisfy<F>(&self, description: &str, predicate: F) -> &Self
    where
        F: Fn(&T) -> bool,
    {
        let items = self.items();
        let failing: Vec<&T> = items.iter().copied().filter(|item| !predicate(*item)).collect();
        if !failing.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Value,
                    format!("all elements {}", description),
                    render(&items),
                )
                .with_detail(format!("failing: {}", render(&failing))),
            );
        }
        self
    }
}

impl<'a, C: Elements + ?Sized> Subject<'a, C> {
    fn items(&self) -> Vec<&'a C::Item> {
        self.actual().elements().collect()
    }
}
