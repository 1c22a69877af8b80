use crate::error::MismatchKind;
use crate::subject::{Subject, render};

/// Checks for anything that reads as text: `str`, `String`, `&str`, `Cow<str>`.
///
/// ```
/// use assert_that::prelude::*;
///
/// let content = "The Truth Is Out There";
/// assert_that(content)
///     .starts_with("The Truth")
///     .contains("Is Out")
///     .ends_with("There");
/// ```
pub trait StringAssertion {
    fn is_equal_to_ignoring_case(&self, expected: &str) -> &Self;
    fn starts_with(&self, prefix: &str) -> &Self;
    fn ends_with(&self, suffix: &str) -> &Self;
    fn contains(&self, fragment: &str) -> &Self;
    fn does_not_contain(&self, fragment: &str) -> &Self;
    fn is_empty(&self) -> &Self;
    fn is_not_empty(&self) -> &Self;

    /// Length in characters, not bytes.
    fn has_length(&self, length: usize) -> &Self;

    /// Unanchored regex search; add `^`/`$` to match the whole string.
    #[cfg(feature = "regex")]
    fn matches(&self, pattern: &str) -> &Self;
}

impl<S: AsRef<str> + ?Sized> StringAssertion for Subject<'_, S> {
    #[track_caller]
    fn is_equal_to_ignoring_case(&self, expected: &str) -> &Self {
        let actual = self.actual().as_ref();
        if actual.to_lowercase() != expected.to_lowercase() {
            self.fail(
                MismatchKind::Text,
                format!("{} (ignoring case)", render(expected)),
                render(actual),
            );
        }
        self
    }

    #[track_caller]
    fn starts_with(&self, prefix: &str) -> &Self {
        self.check_text(self.actual().as_ref().starts_with(prefix), "starts with", prefix)
    }

    #[track_caller]
    fn ends_with(&self, suffix: &str) -> &Self {
        self.check_text(self.actual().as_ref().ends_with(suffix), "ends with", suffix)
    }

    #[track_caller]
    fn contains(&self, fragment: &str) -> &Self {
        self.check_text(self.actual().as_ref().contains(fragment), "contains", fragment)
    }

    #[track_caller]
    fn does_not_contain(&self, fragment: &str) -> &Self {
        self.check_text(
            !self.actual().as_ref().contains(fragment),
            "does not contain",
            fragment,
        )
    }

    #[track_caller]
    fn is_empty(&self) -> &Self {
        let actual = self.actual().as_ref();
        if !actual.is_empty() {
            self.fail(MismatchKind::Text, "\"\"", render(actual));
        }
        self
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        if self.actual().as_ref().is_empty() {
            self.fail(MismatchKind::Text, "non-empty string", "\"\"");
        }
        self
    }

    #[track_caller]
    fn has_length(&self, length: usize) -> &Self {
        let actual = self.actual().as_ref();
        let actual_length = actual.chars().count();
        if actual_length != length {
            self.report(
                crate::MismatchError::new(
                    MismatchKind::Size,
                    length.to_string(),
                    actual_length.to_string(),
                )
                .with_detail(format!("string: {}", render(actual))),
            );
        }
        self
    }

    #[cfg(feature = "regex")]
    #[track_caller]
    fn matches(&self, pattern: &str) -> &Self {
        let actual = self.actual().as_ref();
        let expected = format!("=~ r\"{}\"", pattern);
        match crate::regex_cache::get_or_compile_regex(pattern) {
            Ok(regex) => {
                if !regex.is_match(actual) {
                    self.fail(MismatchKind::Regex, expected, render(actual));
                }
            }
            Err(err) => {
                self.report(
                    crate::MismatchError::new(MismatchKind::Regex, expected, render(actual))
                        .with_detail(format!("invalid pattern: {}", err)),
                );
            }
        }
        self
    }
}

impl<S: AsRef<str> + ?Sized> Subject<'_, S> {
    #[track_caller]
    fn check_text(&self, holds: bool, relation: &str, operand: &str) -> &Self {
        if !holds {
            self.fail(
                MismatchKind::Text,
                format!("{} {}", relation, render(operand)),
                render(self.actual().as_ref()),
            );
        }
        self
    }
}
