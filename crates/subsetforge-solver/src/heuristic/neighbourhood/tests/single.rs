//! Tests for the single-id neighbourhoods.

use subsetforge_test::{four_of_ten, subset};

use super::*;

#[test]
fn test_single_swap_all_moves() {
    let solution = four_of_ten();
    let neighbourhood = SingleSwapNeighbourhood::new().with_fixed_ids([0]);

    let moves = checked_moves(&neighbourhood, &solution);
    assert_eq!(moves.len(), 3 * 6);
    assert!(moves
        .iter()
        .all(|m| m.num_added() == 1 && m.num_deleted() == 1));
}

#[test]
fn test_single_swap_random_move() {
    let solution = four_of_ten();
    let neighbourhood = SingleSwapNeighbourhood::new();
    for m in checked_random_moves(&neighbourhood, &solution, 100) {
        assert!(m.is_swap());
        assert_eq!(m.num_added(), 1);
    }
}

#[test]
fn test_single_swap_full_selection() {
    let solution = subset(3, &[0, 1, 2]);
    let neighbourhood = SingleSwapNeighbourhood::new();
    assert!(neighbourhood.random_move(&solution, &mut rng(1)).is_none());
    assert_eq!(neighbourhood.move_count(&solution), 0);
    assert!(neighbourhood.all_moves(&solution).is_empty());
}

#[test]
fn test_single_addition() {
    let solution = four_of_ten();

    let full = SingleAdditionNeighbourhood::new(4).unwrap();
    assert!(full.random_move(&solution, &mut rng(2)).is_none());
    assert!(full.all_moves(&solution).is_empty());

    let open = SingleAdditionNeighbourhood::new(5).unwrap().with_fixed_ids([9]);
    let moves = checked_moves(&open, &solution);
    assert_eq!(moves.len(), 5);
    assert!(moves.contains(&SubsetMove::addition(4)));
    assert!(!moves.contains(&SubsetMove::addition(9)));

    assert!(SingleAdditionNeighbourhood::new(0).is_err());
    assert_eq!(
        SingleAdditionNeighbourhood::unbounded().move_count(&solution),
        6
    );
}

#[test]
fn test_single_deletion() {
    let solution = four_of_ten();

    let at_min = SingleDeletionNeighbourhood::new(4);
    assert!(at_min.random_move(&solution, &mut rng(3)).is_none());
    assert_eq!(at_min.move_count(&solution), 0);

    let neighbourhood = SingleDeletionNeighbourhood::new(2).with_fixed_ids([3]);
    let moves = checked_moves(&neighbourhood, &solution);
    assert_eq!(
        moves,
        vec![
            SubsetMove::deletion(0),
            SubsetMove::deletion(1),
            SubsetMove::deletion(2),
        ]
    );

    let m = neighbourhood.random_move(&solution, &mut rng(4)).unwrap();
    assert!(moves.contains(&m));
}

#[test]
fn test_single_perturbation_all_types() {
    let solution = four_of_ten();
    let neighbourhood = SinglePerturbationNeighbourhood::new(3, 5).unwrap();

    // 6 additions + 4 deletions + 24 swaps
    let moves = checked_moves(&neighbourhood, &solution);
    assert_eq!(moves.len(), 34);
    assert_eq!(moves.iter().filter(|m| m.num_deleted() == 0).count(), 6);
    assert_eq!(moves.iter().filter(|m| m.num_added() == 0).count(), 4);

    let random = checked_random_moves(&neighbourhood, &solution, 300);
    assert!(random.iter().any(|m| m.num_deleted() == 0));
    assert!(random.iter().any(|m| m.num_added() == 0));
    assert!(random.iter().any(SubsetMove::is_swap));
}

#[test]
fn test_single_perturbation_fixed_size_only_swaps() {
    let solution = four_of_ten();
    let neighbourhood = SinglePerturbationNeighbourhood::new(4, 4).unwrap();

    assert_eq!(checked_moves(&neighbourhood, &solution).len(), 24);
    for m in checked_random_moves(&neighbourhood, &solution, 50) {
        assert!(m.is_swap());
    }
}

#[test]
fn test_single_perturbation_empty_selection() {
    let solution = subset(4, &[]);
    let neighbourhood = SinglePerturbationNeighbourhood::unbounded();

    let moves = checked_moves(&neighbourhood, &solution);
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.num_added() == 1));
}

#[test]
fn test_single_perturbation_invalid_bounds() {
    assert!(SinglePerturbationNeighbourhood::new(5, 3).is_err());
    assert!(SinglePerturbationNeighbourhood::new(0, 0).is_err());
}
