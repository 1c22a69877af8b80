use assert_that::{assert_that_code, fail_because_no_panic};

mod util;

#[test]
fn test_panic_message() {
    let people = vec!["Lolek", "Bolek"];

    let outcome = assert_that_code(|| {
        let _person = people[10];
    });

    outcome
        .panics()
        .has_message("index out of bounds: the len is 2 but the index is 10")
        .has_message_containing("the len is 2");
    assert_eq!(
        outcome.panic_message(),
        Some("index out of bounds: the len is 2 but the index is 10")
    );
}

#[test]
fn test_formatted_and_static_messages() {
    assert_that_code(|| panic!("static message")).has_message("static message");
    assert_that_code(|| panic!("code {}", 42)).has_message("code 42");
}

#[test]
fn test_non_string_payload() {
    assert_that_code(|| std::panic::panic_any(7_u8)).has_message("Box<dyn Any>");
}

#[test]
fn test_does_not_panic() {
    let outcome = assert_that_code(|| {
        let _sum: i32 = [1, 2, 3].iter().sum();
    });

    outcome.does_not_panic();
    assert_eq!(outcome.panic_message(), None);
}

#[test]
fn test_expected_panic_missing() {
    let message = util::capture_panic_message(|| {
        assert_that_code(|| {}).described_as("noop").panics();
    });

    assert!(message.contains("panic mismatch:\n  --> `noop`"));
    assert!(message.ends_with("actual: no panic\n  expected: panic"));
}

#[test]
fn test_unexpected_panic() {
    let message = util::capture_panic_message(|| {
        assert_that_code(|| panic!("boom")).does_not_panic();
    });

    assert!(message.ends_with("actual: panic: \"boom\"\n  expected: no panic"));
}

#[test]
fn test_wrong_message() {
    let message = util::capture_panic_message(|| {
        assert_that_code(|| panic!("boom")).has_message("bang");
    });

    assert!(message.ends_with("actual: panic: \"boom\"\n  expected: panic: \"bang\""));
}

#[test]
fn test_fail_because_no_panic() {
    let message = util::capture_panic_message(|| {
        let result: Result<u8, String> = Ok(1);
        if result.is_ok() {
            fail_because_no_panic("parse error");
        }
    });

    assert!(message.contains("panic mismatch:\n  --> assert-that/tests/panics.rs:"));
    assert!(message.ends_with("actual: no panic\n  expected: panic: parse error"));
}
