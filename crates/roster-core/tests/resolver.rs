//! Tests for collision-free username resolution.

use std::collections::BTreeSet;

use roster_core::UsernameRegistry;

fn taken(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[test]
fn base_candidate_folds_case_and_spaces() {
    assert_eq!(UsernameRegistry::base_candidate("Smith", "John"), "smith.j");
    assert_eq!(
        UsernameRegistry::base_candidate("Van Der Berg", "Ann"),
        "van_der_berg.a"
    );
    // The fold applies to the joined candidate, after the case fold.
    assert_eq!(UsernameRegistry::base_candidate("O Neil", "Pat"), "o_neil.p");
}

#[test]
fn empty_first_name_contributes_no_initial() {
    assert_eq!(UsernameRegistry::base_candidate("Smith", ""), "smith.");
}

#[test]
fn unclaimed_base_is_kept() {
    let mut registry = UsernameRegistry::new(BTreeSet::new());
    assert_eq!(registry.claim("Smith", "John"), "smith.j");
    assert!(registry.is_taken("smith.j"));
}

#[test]
fn first_collision_yields_suffix_two() {
    let mut registry = UsernameRegistry::new(taken(&["smith.j"]));
    assert_eq!(registry.claim("Smith", "John"), "smith.j2");
}

#[test]
fn repeated_collisions_count_upward() {
    let mut registry = UsernameRegistry::new(BTreeSet::new());
    assert_eq!(registry.claim("Smith", "John"), "smith.j");
    assert_eq!(registry.claim("Smith", "Jane"), "smith.j2");
    assert_eq!(registry.claim("Smith", "Jack"), "smith.j3");
    assert_eq!(registry.claim("Smith", "Jill"), "smith.j4");
}

#[test]
fn probe_skips_over_pre_existing_suffixed_names() {
    let mut registry = UsernameRegistry::new(taken(&["smith.j", "smith.j2", "smith.j3"]));
    assert_eq!(registry.claim("Smith", "John"), "smith.j4");
}

#[test]
fn suffix_one_is_never_produced() {
    // Even with base taken and base1 free, the probe starts at 2.
    let mut registry = UsernameRegistry::new(taken(&["smith.j"]));
    let resolved = registry.claim("Smith", "John");
    assert_eq!(resolved, "smith.j2");
    assert!(!registry.is_taken("smith.j1"));
}

#[test]
fn assignments_are_visible_to_later_claims() {
    let mut registry = UsernameRegistry::new(BTreeSet::new());
    let first = registry.claim("Jones", "Mary");
    let second = registry.claim("Jones", "Mark");
    assert_eq!(first, "jones.m");
    assert_eq!(second, "jones.m2");
    assert_eq!(registry.len(), 2);
}
