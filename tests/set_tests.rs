//! Scenario tests for Set.
//!
//! Each test exercises one public operation the way a caller would,
//! checking both the result and the state left behind.

#![cfg(feature = "set")]

use rstest::rstest;
use xtlib::set::{Set, SetError};

fn set_of(values: &[&'static str]) -> Set<&'static str> {
    values.iter().copied().collect()
}

// =============================================================================
// add
// =============================================================================

#[rstest]
fn test_add_new_element() {
    let mut set = Set::new();
    set.add("hello");

    assert_eq!(set.items(), &["hello"]);
}

#[rstest]
fn test_add_does_not_duplicate() {
    let mut set = Set::new();
    set.add("hello");
    set.add("hello");

    assert_eq!(set.items(), &["hello"]);
}

#[rstest]
fn test_add_appends_in_insertion_order() {
    let mut set = Set::new();
    set.add(3);
    set.add(1);
    set.add(2);
    set.add(1);

    assert_eq!(set.items(), &[3, 1, 2]);
}

// =============================================================================
// remove / pop / discard / clear
// =============================================================================

#[rstest]
fn test_remove_existing_element() {
    let mut set = set_of(&["hello"]);

    assert_eq!(set.remove(&"hello"), Ok(()));
    assert!(set.items().is_empty());
}

#[rstest]
fn test_remove_missing_element_errors_and_keeps_state() {
    let mut set = set_of(&["hello"]);

    let error = set.remove(&"invalid").unwrap_err();
    assert_eq!(error, SetError::NotFound);
    assert_eq!(error.to_string(), "value is not present in the set");
    assert_eq!(set.items(), &["hello"]);
}

#[rstest]
fn test_pop_returns_removed_element() {
    let mut set = set_of(&["hello"]);

    assert_eq!(set.pop(&"hello"), Ok("hello"));
    assert!(set.items().is_empty());
}

#[rstest]
fn test_pop_missing_element_errors_and_keeps_state() {
    let mut set: Set<String> = Set::new();
    set.add("hello".to_string());

    let result = set.pop(&"invalid".to_string());
    assert_eq!(result, Err(SetError::NotFound));
    assert_eq!(result.unwrap_or_default(), "");
    assert_eq!(set.items(), &["hello".to_string()]);
}

#[rstest]
fn test_pop_returns_the_stored_value() {
    #[derive(Debug, Clone)]
    struct Tagged {
        key: u8,
        tag: &'static str,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    let mut set = Set::new();
    set.add(Tagged { key: 1, tag: "stored" });

    let popped = set.pop(&Tagged { key: 1, tag: "probe" }).unwrap();
    assert_eq!(popped.tag, "stored");
}

#[rstest]
fn test_discard_existing_element() {
    let mut set = set_of(&["hello"]);
    set.discard(&"hello");

    assert!(set.items().is_empty());
}

#[rstest]
fn test_discard_missing_element_is_noop() {
    let mut set = set_of(&["hello"]);
    set.discard(&"invalid");

    assert_eq!(set.items(), &["hello"]);
}

#[rstest]
fn test_clear_empties_set() {
    let mut set = set_of(&["hello", "world"]);
    set.clear();

    assert!(set.items().is_empty());
    assert!(set.is_empty());
}

// =============================================================================
// contains / items / len
// =============================================================================

#[rstest]
#[case::present("hello", true)]
#[case::absent("invalid", false)]
fn test_contains(#[case] value: &'static str, #[case] expected: bool) {
    let set = set_of(&["hello"]);
    assert_eq!(set.contains(&value), expected);
}

#[rstest]
fn test_items_returns_elements_in_order() {
    let set = set_of(&["hello", "world"]);
    assert_eq!(set.items(), &["hello", "world"]);
}

#[rstest]
fn test_to_vec_is_detached_snapshot() {
    let mut set = set_of(&["hello", "world"]);
    let mut snapshot = set.to_vec();
    snapshot.push("extra");
    snapshot.push("hello");
    set.discard(&"world");

    assert_eq!(set.items(), &["hello"]);
    assert_eq!(snapshot, vec!["hello", "world", "extra", "hello"]);
}

#[rstest]
fn test_len_tracks_mutations() {
    let mut set = Set::new();
    assert_eq!(set.len(), 0);

    set.add("hello");
    set.add("world");
    assert_eq!(set.len(), 2);

    set.discard(&"hello");
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Relational predicates
// =============================================================================

#[rstest]
fn test_is_subset_is_strict_by_length() {
    let small = set_of(&["hello"]);
    let large = set_of(&["hello", "world"]);

    assert!(small.is_subset(&large));
    assert!(!large.is_subset(&small));
    assert!(!small.is_subset(&small));
}

#[rstest]
fn test_is_superset_is_strict_by_length() {
    let small = set_of(&["hello"]);
    let large = set_of(&["hello", "world"]);

    assert!(large.is_superset(&small));
    assert!(!small.is_superset(&large));
    assert!(!large.is_superset(&large.clone()));
}

#[rstest]
fn test_is_disjoint() {
    let first = set_of(&["hello"]);
    let second = set_of(&["world"]);
    let third = set_of(&["world", "hello"]);
    let empty: Set<&str> = Set::new();

    assert!(first.is_disjoint(&second));
    assert!(!first.is_disjoint(&third));
    assert!(empty.is_disjoint(&first));
    assert!(empty.is_disjoint(&empty));
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_union() {
    let first = set_of(&["hello"]);
    let second = set_of(&["world"]);

    assert_eq!(first.union(&[&second]).items(), &["hello", "world"]);
}

#[rstest]
fn test_intersection() {
    let first = set_of(&["hello", "world"]);
    let second = set_of(&["hello", "again"]);

    assert_eq!(first.intersection(&[&second]).items(), &["hello"]);
}

#[rstest]
fn test_intersection_without_others_is_empty() {
    let first = set_of(&["hello", "world"]);

    assert!(first.intersection(&[]).items().is_empty());
}

#[rstest]
fn test_difference() {
    let first = set_of(&["hello", "world"]);
    let second = set_of(&["bye", "world"]);

    assert_eq!(first.difference(&[&second]).items(), &["hello"]);
}

#[rstest]
fn test_difference_without_others_copies_receiver() {
    let first = set_of(&["hello", "world"]);

    assert_eq!(first.difference(&[]).items(), &["hello", "world"]);
}

#[rstest]
fn test_symmetric_difference() {
    let first = set_of(&["hello", "world"]);
    let second = set_of(&["hello", "bye"]);

    assert_eq!(first.symmetric_difference(&second).items(), &["world", "bye"]);
}

#[rstest]
fn test_algebra_leaves_inputs_untouched() {
    let first = set_of(&["hello", "world"]);
    let second = set_of(&["hello", "bye"]);

    let _ = first.union(&[&second]);
    let _ = first.intersection(&[&second]);
    let _ = first.difference(&[&second]);
    let _ = first.symmetric_difference(&second);

    assert_eq!(first.items(), &["hello", "world"]);
    assert_eq!(second.items(), &["hello", "bye"]);
}

#[rstest]
fn test_works_with_partial_eq_only_elements() {
    let mut set = Set::new();
    set.add(1.5_f64);
    set.add(2.5);
    set.add(1.5);

    assert_eq!(set.items(), &[1.5, 2.5]);
    let other: Set<f64> = [2.5, 3.5].into();
    assert_eq!(set.union(&[&other]).items(), &[1.5, 2.5, 3.5]);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_from_iter_deduplicates_on_first_occurrence() {
    let set: Set<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
    assert_eq!(set.items(), &[3, 1, 2]);
}

#[rstest]
fn test_extend_uses_add_semantics() {
    let mut set: Set<i32> = [1, 2].into();
    set.extend([2, 3, 1, 4]);
    assert_eq!(set.items(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_into_vec_keeps_order() {
    let set: Set<char> = ['c', 'a', 'b'].into();
    assert_eq!(set.into_vec(), vec!['c', 'a', 'b']);
}

#[rstest]
fn test_borrowed_iteration() {
    let set: Set<i32> = [1, 2, 3].into();
    let doubled: Vec<i32> = (&set).into_iter().map(|value| value * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(set.as_ref(), &[1, 2, 3]);
}
