use std::fmt;
use std::panic::Location;

use crate::config;

/// The check that produced a [`MismatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    Value,
    Equality,
    Comparison,
    Text,
    Regex,
    Containment,
    Size,
    Presence,
    Outcome,
    DateTime,
    File,
    Panic,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::Value => write!(f, "value"),
            MismatchKind::Equality => write!(f, "equality"),
            MismatchKind::Comparison => write!(f, "comparison"),
            MismatchKind::Text => write!(f, "string"),
            MismatchKind::Regex => write!(f, "regex pattern"),
            MismatchKind::Containment => write!(f, "containment"),
            MismatchKind::Size => write!(f, "size"),
            MismatchKind::Presence => write!(f, "presence"),
            MismatchKind::Outcome => write!(f, "result"),
            MismatchKind::DateTime => write!(f, "date-time"),
            MismatchKind::File => write!(f, "file"),
            MismatchKind::Panic => write!(f, "panic"),
        }
    }
}

/// A failed assertion: what was expected, what was found, and where.
///
/// Raised by every assertion in this crate. Outside of soft assertions the
/// error is rendered and raised as a panic, which fails the running test.
#[derive(Debug, Clone)]
pub struct MismatchError {
    kind: MismatchKind,
    subject: Option<String>,
    expected: String,
    actual: String,
    detail: Option<String>,
    file: &'static str,
    line: u32,
}

impl MismatchError {
    /// Creates an error located at the caller.
    ///
    /// Rendered values longer than the configured maximum are shortened.
    #[track_caller]
    pub fn new(kind: MismatchKind, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let location = Location::caller();
        let max_len = config::get().max_value_len;

        MismatchError {
            kind,
            subject: None,
            expected: truncate_value(expected.into(), max_len),
            actual: truncate_value(actual.into(), max_len),
            detail: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Attaches an extra line of explanation, e.g. the missing elements.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Names the value under test, e.g. `Person.age`.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn kind(&self) -> MismatchKind {
        self.kind
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fails the current test with this error.
    pub fn raise(self) -> ! {
        tracing::debug!(
            kind = %self.kind,
            subject = self.subject.as_deref().unwrap_or("<unnamed>"),
            file = self.file,
            line = self.line,
            "assertion failed"
        );
        panic!("{}", self)
    }

    fn write_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} mismatch:", self.kind)?;
        match &self.subject {
            Some(subject) => {
                let subject = truncate_path(subject, config::get().max_path_len);
                writeln!(f, "  --> `{}` ({}:{})", subject, self.file, self.line)?;
            }
            None => writeln!(f, "  --> {}:{}", self.file, self.line)?,
        }
        writeln!(f, "  actual: {}", self.actual)?;
        write!(f, "  expected: {}", self.expected)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  {}", detail)?;
        }
        Ok(())
    }
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assert_that! failed:\n\n")?;
        self.write_body(f)
    }
}

impl std::error::Error for MismatchError {}

/// Renders several errors as a single report.
pub fn format_mismatches(errors: &[MismatchError]) -> String {
    match errors {
        [] => "assert_that! failed: no errors provided".to_string(),
        [single] => single.to_string(),
        _ => {
            let mut result = format!("assert_that! failed: {} mismatches\n", errors.len());
            for error in errors {
                result.push('\n');
                result.push_str(&Body(error).to_string());
                result.push('\n');
            }
            result
        }
    }
}

struct Body<'a>(&'a MismatchError);

impl fmt::Display for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_body(f)
    }
}

fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let ellipsis = "...";
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() <= 2 {
        let available = max_len.saturating_sub(ellipsis.len());
        let mut start = path.len().saturating_sub(available);
        while !path.is_char_boundary(start) {
            start += 1;
        }
        return format!("{}{}", ellipsis, &path[start..]);
    }

    // Keep the root and as many trailing segments as fit
    let first = parts[0];
    let mut length = first.len() + ellipsis.len();
    let mut tail = Vec::new();
    for part in parts[1..].iter().rev() {
        let part_len = part.len() + 1;
        if length + part_len > max_len {
            break;
        }
        length += part_len;
        tail.insert(0, *part);
    }

    match tail.as_slice() {
        [] => format!("{}{}{}", first, ellipsis, parts[parts.len() - 1]),
        rest => format!("{}{}{}", first, ellipsis, rest.join(".")),
    }
}

fn truncate_value(value: String, max_len: usize) -> String {
    if value.chars().count() <= max_len {
        return value;
    }
    let mut truncated: String = value.chars().take(max_len).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_error() {
        let error = MismatchError::new(MismatchKind::Value, "25", "23").with_subject("Person.age");
        let line = error.line();
        let rendered = error.to_string();

        assert_eq!(
            rendered,
            format!(
                "assert_that! failed:\n\nvalue mismatch:\n  --> `Person.age` (assert-that/src/error.rs:{line})\n  actual: 23\n  expected: 25"
            )
        );
    }

    #[test]
    fn renders_detail_line() {
        let error = MismatchError::new(MismatchKind::Containment, r#"["a"]"#, "[]")
            .with_detail(r#"missing: ["a"]"#);

        assert!(error.to_string().ends_with("\n  missing: [\"a\"]"));
        assert_eq!(error.detail(), Some(r#"missing: ["a"]"#));
    }

    #[test]
    fn unnamed_subject_shows_location_only() {
        let error = MismatchError::new(MismatchKind::Size, "3", "2");
        let rendered = error.to_string();

        assert!(rendered.contains("size mismatch:\n  --> assert-that/src/error.rs:"));
        assert!(error.subject().is_none());
    }

    #[test]
    fn multiple_errors_share_one_header() {
        let errors = vec![
            MismatchError::new(MismatchKind::Value, "1", "2").with_subject("a"),
            MismatchError::new(MismatchKind::Comparison, "> 5", "3").with_subject("b"),
        ];
        let rendered = format_mismatches(&errors);

        assert!(rendered.starts_with("assert_that! failed: 2 mismatches\n\nvalue mismatch:"));
        assert_eq!(rendered.matches("assert_that! failed").count(), 1);
        assert!(rendered.contains("\ncomparison mismatch:\n  --> `b`"));
    }

    #[test]
    fn format_mismatches_handles_empty_and_single() {
        assert_eq!(format_mismatches(&[]), "assert_that! failed: no errors provided");

        let single = MismatchError::new(MismatchKind::Presence, "Some(_)", "None");
        assert_eq!(format_mismatches(std::slice::from_ref(&single)), single.to_string());
    }

    #[test]
    fn truncate_path_keeps_short_paths() {
        assert_eq!(truncate_path("user.name", 60), "user.name");
    }

    #[test]
    fn truncate_path_keeps_root_and_tail() {
        let path = "order.customer.address.street.line_one.building.floor";
        assert_eq!(truncate_path(path, 30), "order...building.floor");
    }

    #[test]
    fn truncate_path_without_separators() {
        let path = "a_really_long_single_segment_subject_name";
        let truncated = truncate_path(path, 20);

        assert!(truncated.starts_with("..."));
        assert_eq!(truncated.len(), 20);
    }

    #[test]
    fn truncate_value_appends_ellipsis() {
        assert_eq!(truncate_value("abcdef".to_string(), 3), "abc...");
        assert_eq!(truncate_value("abc".to_string(), 3), "abc");
    }
}
