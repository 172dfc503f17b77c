//! Tests for SubsetMove operations.

use std::collections::{BTreeSet, HashSet};

use subsetforge_core::{Subset, SubsetForgeError, SubsetSolution};

use super::*;

fn subset(num_ids: usize, selected: &[usize]) -> Subset {
    Subset::with_selection(num_ids, selected.iter().copied()).unwrap()
}

#[test]
fn test_swap_move_do_and_undo() {
    let mut solution = subset(10, &[0, 1, 2, 3]);
    let original = solution.clone();

    let m = SubsetMove::swap([4, 5], [1, 2]);
    m.apply_to(&mut solution).unwrap();

    assert_eq!(solution.selected_ids(), &BTreeSet::from([0, 3, 4, 5]));
    assert_eq!(solution.num_selected_ids(), 4);

    m.undo(&mut solution).unwrap();
    assert_eq!(solution, original);
}

#[test]
fn test_inverse_restores_selection() {
    let mut solution = subset(6, &[0, 2]);
    let original = solution.selected_ids().clone();

    let m = SubsetMove::swap([1, 3], [2]);
    m.apply_to(&mut solution).unwrap();
    m.inverse().apply_to(&mut solution).unwrap();

    assert_eq!(solution.selected_ids(), &original);
}

#[test]
fn test_inverse_swaps_sets() {
    let m = SubsetMove::swap([7], [1, 2]);
    let inv = m.inverse();
    assert_eq!(inv.added_ids(), &BTreeSet::from([1, 2]));
    assert_eq!(inv.deleted_ids(), &BTreeSet::from([7]));
    assert_eq!(inv.inverse(), m);
}

#[test]
fn test_delete_unselected_is_illegal() {
    let mut solution = subset(5, &[0]);
    let m = SubsetMove::swap([2], [1]);

    let err = m.apply_to(&mut solution).unwrap_err();
    assert!(matches!(err, SubsetForgeError::IllegalMove(_)));
    assert_eq!(solution, subset(5, &[0]), "failed move must not mutate");
}

#[test]
fn test_add_selected_is_illegal() {
    let mut solution = subset(5, &[0, 1]);
    let m = SubsetMove::swap([1, 3], [0]);

    let err = m.apply_to(&mut solution).unwrap_err();
    assert!(matches!(err, SubsetForgeError::IllegalMove(_)));
    assert_eq!(solution, subset(5, &[0, 1]), "failed move must not mutate");
}

#[test]
fn test_add_unknown_id_is_illegal() {
    let mut solution = subset(3, &[]);
    assert!(SubsetMove::addition(9).apply_to(&mut solution).is_err());
}

#[test]
fn test_addition_and_deletion() {
    let mut solution = subset(4, &[0]);

    SubsetMove::addition(3).apply_to(&mut solution).unwrap();
    assert!(solution.is_selected(3));

    SubsetMove::deletion(0).apply_to(&mut solution).unwrap();
    assert_eq!(solution.selected_ids(), &BTreeSet::from([3]));
}

#[test]
fn test_is_swap() {
    assert!(SubsetMove::swap([1, 2], [3, 4]).is_swap());
    assert!(!SubsetMove::swap([1, 2], [3]).is_swap());
    assert!(!SubsetMove::addition(1).is_swap());
    assert!(!SubsetMove::default().is_swap());
}

#[test]
fn test_equality_is_set_based() {
    let a = SubsetMove::swap([5, 4], [2, 1]);
    let b = SubsetMove::swap([4, 5], [1, 2]);
    assert_eq!(a, b);

    let set: HashSet<SubsetMove> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);

    assert_ne!(
        SubsetMove::swap([1], [2]),
        SubsetMove::swap([2], [1]),
        "direction matters"
    );
}

#[test]
fn test_display() {
    let m = SubsetMove::swap([3], [1]);
    assert_eq!(m.to_string(), "+{3} -{1}");
}
