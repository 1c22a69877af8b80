use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{MismatchError, MismatchKind};
use crate::subject::{Subject, render};

/// A map from each key to several values.
///
/// Keys whose value list is empty count as absent.
pub trait Multimap {
    type Key;
    type Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn distinct_keys(&self) -> impl Iterator<Item = &Self::Key>;
}

impl<K, V, S> Multimap for HashMap<K, Vec<V>, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    fn distinct_keys(&self) -> impl Iterator<Item = &K> {
        self.iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, _)| key)
    }
}

impl<K, V> Multimap for BTreeMap<K, Vec<V>> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    fn distinct_keys(&self) -> impl Iterator<Item = &K> {
        self.iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, _)| key)
    }
}

/// Checks over keys and key/value pairs of a [`Multimap`].
///
/// ```
/// use assert_that::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut teams: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
/// teams.entry("Lakers").or_default().extend(["Kobe Bryant", "Magic Johnson"]);
/// teams.entry("Spurs").or_default().push("Tim Duncan");
///
/// assert_that(&teams)
///     .contains_keys(&["Lakers", "Spurs"])
///     .contains_entries(&[("Lakers", "Kobe Bryant"), ("Spurs", "Tim Duncan")])
///     .has_size(3);
/// ```
pub trait MultimapAssertion<K, V> {
    fn contains_keys<Q: fmt::Debug>(&self, keys: &[Q]) -> &Self
    where
        K: PartialEq<Q>;

    fn does_not_contain_keys<Q: fmt::Debug>(&self, keys: &[Q]) -> &Self
    where
        K: PartialEq<Q>;

    fn contains_entries<Q: fmt::Debug, R: fmt::Debug>(&self, entries: &[(Q, R)]) -> &Self
    where
        K: PartialEq<Q>,
        V: PartialEq<R>;

    /// Number of key/value pairs, not keys.
    fn has_size(&self, size: usize) -> &Self;
}

impl<M, K, V> MultimapAssertion<K, V> for Subject<'_, M>
where
    M: Multimap<Key = K, Value = V> + fmt::Debug + ?Sized,
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[track_caller]
    fn contains_keys<Q: fmt::Debug>(&self, keys: &[Q]) -> &Self
    where
        K: PartialEq<Q>,
    {
        let missing: Vec<&Q> = keys
            .iter()
            .filter(|q| !self.actual().distinct_keys().any(|key| key == *q))
            .collect();
        if !missing.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("keys {}", render(keys)),
                    render(self.actual()),
                )
                .with_detail(format!("missing keys: {}", render(&missing))),
            );
        }
        self
    }

    #[track_caller]
    fn does_not_contain_keys<Q: fmt::Debug>(&self, keys: &[Q]) -> &Self
    where
        K: PartialEq<Q>,
    {
        let found: Vec<&Q> = keys
            .iter()
            .filter(|q| self.actual().distinct_keys().any(|key| key == *q))
            .collect();
        if !found.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("no keys {}", render(keys)),
                    render(self.actual()),
                )
                .with_detail(format!("found keys: {}", render(&found))),
            );
        }
        self
    }

    #[track_caller]
    fn contains_entries<Q: fmt::Debug, R: fmt::Debug>(&self, entries: &[(Q, R)]) -> &Self
    where
        K: PartialEq<Q>,
        V: PartialEq<R>,
    {
        let missing: Vec<&(Q, R)> = entries
            .iter()
            .filter(|(q, r)| {
                !self
                    .actual()
                    .entries()
                    .any(|(key, value)| key == q && value == r)
            })
            .collect();
        if !missing.is_empty() {
            self.report(
                MismatchError::new(
                    MismatchKind::Containment,
                    format!("entries {}", render(entries)),
                    render(self.actual()),
                )
                .with_detail(format!("missing entries: {}", render(&missing))),
            );
        }
        self
    }

    #[track_caller]
    fn has_size(&self, size: usize) -> &Self {
        let actual_size = self.actual().entries().count();
        if actual_size != size {
            self.report(
                MismatchError::new(MismatchKind::Size, size.to_string(), actual_size.to_string())
                    .with_detail(format!("multimap: {}", render(self.actual()))),
            );
        }
        self
    }
}
