use std::fmt;

use crate::error::{MismatchError, MismatchKind};
use crate::soft::SoftAssertions;

/// A borrowed value under assertion.
///
/// `Subject` carries no checks of its own. The capability traits
/// ([`EqualityAssertion`](crate::EqualityAssertion),
/// [`StringAssertion`](crate::StringAssertion),
/// [`IterableAssertion`](crate::IterableAssertion), ...) are implemented for
/// the subject shapes they apply to, and every check returns the subject so
/// checks can be chained.
pub struct Subject<'a, T: ?Sized> {
    actual: &'a T,
    description: Option<String>,
    soft: Option<&'a SoftAssertions>,
}

impl<'a, T: ?Sized> Subject<'a, T> {
    pub fn new(actual: &'a T) -> Self {
        Subject {
            actual,
            description: None,
            soft: None,
        }
    }

    pub(crate) fn collected_by(actual: &'a T, soft: &'a SoftAssertions) -> Self {
        Subject {
            actual,
            description: None,
            soft: Some(soft),
        }
    }

    /// Names the subject in failure messages.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn actual(&self) -> &'a T {
        self.actual
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Records a failed check located at the caller.
    ///
    /// Custom capability traits call this the same way the built-in ones do.
    #[track_caller]
    pub fn fail(&self, kind: MismatchKind, expected: impl Into<String>, actual: impl Into<String>) {
        self.report(MismatchError::new(kind, expected, actual));
    }

    /// Records a failed check on one field of the subject (`Person.age`).
    #[track_caller]
    pub fn fail_field(
        &self,
        field: &str,
        kind: MismatchKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) {
        let path = match &self.description {
            Some(description) => format!("{}.{}", description, field),
            None => field.to_string(),
        };
        self.dispatch(MismatchError::new(kind, expected, actual).with_subject(path));
    }

    /// Raises `error`, or hands it to the soft collector this subject came from.
    pub fn report(&self, error: MismatchError) {
        let error = match &self.description {
            Some(description) => error.with_subject(description.clone()),
            None => error,
        };
        self.dispatch(error);
    }

    fn dispatch(&self, error: MismatchError) {
        match self.soft {
            Some(soft) => soft.collect(error),
            None => error.raise(),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Subject<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("actual", &self.actual)
            .field("description", &self.description)
            .field("soft", &self.soft.is_some())
            .finish()
    }
}

/// Debug rendering used for actual and expected values.
pub(crate) fn render<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}
