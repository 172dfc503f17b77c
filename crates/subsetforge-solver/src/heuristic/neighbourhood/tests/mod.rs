//! Tests for the neighbourhood module.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use subsetforge_core::SubsetSolution;
use subsetforge_test::{assert_move_within_candidates, assert_no_duplicates, MoveShape};

use super::*;

mod single;

impl MoveShape for SubsetMove {
    fn added(&self) -> &BTreeSet<usize> {
        self.added_ids()
    }

    fn deleted(&self) -> &BTreeSet<usize> {
        self.deleted_ids()
    }
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Collects every move and checks the properties all neighbourhoods share.
fn checked_moves<N, S>(neighbourhood: &N, solution: &S) -> Vec<SubsetMove>
where
    N: Neighbourhood,
    S: SubsetSolution,
{
    let moves = neighbourhood.all_moves(solution);
    for m in &moves {
        assert_move_within_candidates(m, solution, neighbourhood.fixed_ids());
    }
    assert_no_duplicates(&moves);
    assert_eq!(moves.len() as u128, neighbourhood.move_count(solution));
    moves
}

/// Draws `trials` random moves and checks them like `checked_moves`.
fn checked_random_moves<N, S>(neighbourhood: &N, solution: &S, trials: usize) -> Vec<SubsetMove>
where
    N: Neighbourhood,
    S: SubsetSolution,
{
    let mut rng = rng(17);
    (0..trials)
        .map(|_| {
            let m = neighbourhood
                .random_move(solution, &mut rng)
                .expect("a move should be possible");
            assert_move_within_candidates(&m, solution, neighbourhood.fixed_ids());
            m
        })
        .collect()
}
