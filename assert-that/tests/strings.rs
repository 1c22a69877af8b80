use assert_that::prelude::*;

mod util;

#[test]
fn test_string_checks() {
    let name = String::from("John");

    assert_that(&name)
        .is_equal_to_ignoring_case("JOHN")
        .starts_with("Jo")
        .ends_with("hn")
        .contains("oh")
        .does_not_contain("Paul")
        .is_not_empty()
        .has_length(4);
    assert_that("").is_empty().has_length(0);
}

#[test]
fn test_length_counts_characters() {
    assert_that("Zoë").has_length(3);
    assert_that("日本語").has_length(3).is_equal_to_ignoring_case("日本語");
}

#[test]
fn test_borrowed_forms() {
    let borrowed: &str = "Lolek";
    let cow: std::borrow::Cow<'_, str> = std::borrow::Cow::Borrowed("Bolek");

    assert_that(&borrowed).starts_with("Lo");
    assert_that(&cow).ends_with("ek");
}

#[test]
fn test_ignoring_case_is_not_equality() {
    let message = util::capture_panic_message(|| {
        assert_that("John").is_equal_to_ignoring_case("Paul");
    });

    assert!(message.contains("string mismatch:"));
    assert!(message.contains("actual: \"John\"\n  expected: \"Paul\" (ignoring case)"));
}

#[test]
fn test_prefix_failure() {
    let message = util::capture_panic_message(|| {
        let greeting = "hello world";
        assert_that!(greeting).starts_with("world");
    });

    assert!(message.contains("--> `greeting`"));
    assert!(message.contains("expected: starts with \"world\""));
}

#[test]
fn test_empty_failure() {
    let message = util::capture_panic_message(|| {
        assert_that("x").is_empty();
    });

    assert!(message.ends_with("actual: \"x\"\n  expected: \"\""));
}

#[test]
fn test_length_failure_shows_string() {
    let message = util::capture_panic_message(|| {
        assert_that("abc").has_length(2);
    });

    assert!(message.contains("size mismatch:"));
    assert!(message.ends_with("actual: 3\n  expected: 2\n  string: \"abc\""));
}

#[cfg(feature = "regex")]
#[test]
fn test_regex_matches() {
    assert_that("alice@company.com")
        .matches(r"^[a-z]+@")
        .matches(r"@company\.com$");
    assert_that(&String::from("v1.2.3")).matches(r"^v\d+\.\d+\.\d+$");
}

#[cfg(feature = "regex")]
#[test]
fn test_regex_failure() {
    let message = util::capture_panic_message(|| {
        assert_that("bob@other.org").matches(r"@company\.com$");
    });

    assert!(message.contains("regex pattern mismatch:"));
    assert!(message.contains(r#"expected: =~ r"@company\.com$""#));
}

#[cfg(feature = "regex")]
#[test]
fn test_invalid_regex_fails() {
    let message = util::capture_panic_message(|| {
        assert_that("anything").matches("(unclosed");
    });

    assert!(message.contains("invalid pattern:"));
}
