//! Runtime choice between neighbourhoods.

use std::collections::BTreeSet;

use rand::Rng;
use subsetforge_core::SubsetSolution;

use crate::heuristic::r#move::SubsetMove;

use super::{
    DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood, MultiAdditionNeighbourhood, MultiDeletionNeighbourhood,
    MultiSwapNeighbourhood, Neighbourhood, SingleAdditionNeighbourhood,
    SingleDeletionNeighbourhood, SinglePerturbationNeighbourhood, SingleSwapNeighbourhood,
};

/// Any of the built-in neighbourhoods, chosen at runtime.
///
/// Built from configuration by `NeighbourhoodBuilder`. Moves are streamed
/// through a boxed iterator; use the concrete types when the neighbourhood
/// is known at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyNeighbourhood {
    SingleSwap(SingleSwapNeighbourhood),
    SingleAddition(SingleAdditionNeighbourhood),
    SingleDeletion(SingleDeletionNeighbourhood),
    SinglePerturbation(SinglePerturbationNeighbourhood),
    MultiSwap(MultiSwapNeighbourhood),
    MultiAddition(MultiAdditionNeighbourhood),
    MultiDeletion(MultiDeletionNeighbourhood),
    DisjointMultiSwap(DisjointMultiSwapNeighbourhood),
    DisjointMultiAddition(DisjointMultiAdditionNeighbourhood),
    DisjointMultiDeletion(DisjointMultiDeletionNeighbourhood),
}

macro_rules! dispatch {
    ($self:expr, $n:ident => $body:expr) => {
        match $self {
            AnyNeighbourhood::SingleSwap($n) => $body,
            AnyNeighbourhood::SingleAddition($n) => $body,
            AnyNeighbourhood::SingleDeletion($n) => $body,
            AnyNeighbourhood::SinglePerturbation($n) => $body,
            AnyNeighbourhood::MultiSwap($n) => $body,
            AnyNeighbourhood::MultiAddition($n) => $body,
            AnyNeighbourhood::MultiDeletion($n) => $body,
            AnyNeighbourhood::DisjointMultiSwap($n) => $body,
            AnyNeighbourhood::DisjointMultiAddition($n) => $body,
            AnyNeighbourhood::DisjointMultiDeletion($n) => $body,
        }
    };
}

impl Neighbourhood for AnyNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        dispatch!(self, n => n.random_move(solution, rng))
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let moves: Box<dyn Iterator<Item = SubsetMove> + 'a> =
            dispatch!(self, n => Box::new(n.iter_moves(solution)));
        moves
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        dispatch!(self, n => n.move_count(solution))
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        dispatch!(self, n => n.fixed_ids())
    }
}

macro_rules! impl_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnyNeighbourhood {
                fn from(neighbourhood: $ty) -> Self {
                    AnyNeighbourhood::$variant(neighbourhood)
                }
            }
        )*
    };
}

impl_from! {
    SingleSwap => SingleSwapNeighbourhood,
    SingleAddition => SingleAdditionNeighbourhood,
    SingleDeletion => SingleDeletionNeighbourhood,
    SinglePerturbation => SinglePerturbationNeighbourhood,
    MultiSwap => MultiSwapNeighbourhood,
    MultiAddition => MultiAdditionNeighbourhood,
    MultiDeletion => MultiDeletionNeighbourhood,
    DisjointMultiSwap => DisjointMultiSwapNeighbourhood,
    DisjointMultiAddition => DisjointMultiAdditionNeighbourhood,
    DisjointMultiDeletion => DisjointMultiDeletionNeighbourhood,
}
