use std::collections::{BTreeSet, HashSet, VecDeque};

use assert_that::prelude::*;

mod util;

#[test]
fn test_vec_checks() {
    let names = vec!["Mike", "Nick", "Betty"];

    assert_that(&names)
        .is_not_empty()
        .has_size(3)
        .contains(&["Mike", "Betty"])
        .does_not_contain(&["Bob"])
        .contains_exactly(&["Mike", "Nick", "Betty"])
        .contains_exactly_in_any_order(&["Betty", "Mike", "Nick"])
        .all_satisfy("have names longer than 3", |name| name.len() > 3);
}

#[test]
fn test_slices_and_arrays() {
    let numbers = [3_u8, 1, 2];

    assert_that(&numbers).has_size(3).contains(&[1_u8]);
    assert_that(&numbers[..2]).contains_exactly(&[3_u8, 1]);

    let empty: Vec<u8> = Vec::new();
    assert_that(&empty).is_empty().has_size(0).contains(&[] as &[u8]);
}

#[test]
fn test_other_collections() {
    let queue: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
    let set: HashSet<&str> = ["a", "b"].into_iter().collect();
    let sorted: BTreeSet<u32> = [3, 1, 2].into_iter().collect();

    assert_that(&queue).contains_exactly(&[1_i32, 2, 3]);
    assert_that(&set).has_size(2).contains_exactly_in_any_order(&["b", "a"]);
    assert_that(&sorted).contains_exactly(&[1_u32, 2, 3]);
}

#[test]
fn test_owned_elements_against_borrowed() {
    let names = vec!["Mike".to_string(), "Nick".to_string()];

    assert_that(&names).contains(&["Nick"]).does_not_contain(&["nick"]);
}

#[test]
fn test_duplicates_count_in_any_order() {
    let letters = vec!['a', 'b', 'a'];

    assert_that(&letters).contains_exactly_in_any_order(&['a', 'a', 'b']);

    let message = util::capture_panic_message(|| {
        assert_that(&letters).contains_exactly_in_any_order(&['a', 'b', 'b']);
    });
    assert!(message.ends_with("missing: ['b'], unexpected: ['a']"));
}

#[test]
fn test_contains_failure_lists_missing() {
    let message = util::capture_panic_message(|| {
        let names = vec!["Mike", "Nick"];
        assert_that!(names).contains(&["Mike", "Betty", "Bob"]);
    });

    assert!(message.contains("containment mismatch:\n  --> `names`"));
    assert!(message.contains("actual: [\"Mike\", \"Nick\"]"));
    assert!(message.ends_with("missing: [\"Betty\", \"Bob\"]"));
}

#[test]
fn test_does_not_contain_failure_lists_found() {
    let message = util::capture_panic_message(|| {
        assert_that(&vec![1_i32, 2, 3]).does_not_contain(&[2_i32, 4]);
    });

    assert!(message.ends_with("found: [2]"));
}

#[test]
fn test_contains_exactly_is_ordered() {
    let message = util::capture_panic_message(|| {
        assert_that(&vec![1_i32, 2]).contains_exactly(&[2_i32, 1]);
    });

    assert!(message.contains("actual: [1, 2]\n  expected: exactly [2, 1]"));
}

#[test]
fn test_size_failure() {
    let message = util::capture_panic_message(|| {
        assert_that(&vec!["x"]).has_size(2);
    });

    assert!(message.contains("size mismatch:"));
    assert!(message.ends_with("actual: 1\n  expected: 2\n  elements: [\"x\"]"));
}

#[test]
fn test_all_satisfy_failure() {
    let message = util::capture_panic_message(|| {
        assert_that(&vec![2_i32, 3, 4, 5]).all_satisfy("are even", |n| n % 2 == 0);
    });

    assert!(message.contains("expected: all elements are even"));
    assert!(message.ends_with("failing: [3, 5]"));
}
