use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use super::Evaluator;
use crate::env::Board;
use crate::search::Heuristic;

/// Greedy agent that only looks at its own next move.
/// Ties are broken randomly.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReflexAgent {
    pub heuristic: Evaluator,
}

impl ReflexAgent {
    pub fn decide<S: Board>(&self, state: &S) -> Option<S::Action> {
        self.decide_with(state, &mut SmallRng::from_entropy())
    }

    pub fn decide_with<S: Board, R: Rng + ?Sized>(
        &self,
        state: &S,
        rng: &mut R,
    ) -> Option<S::Action> {
        let scores: Vec<(S::Action, f64)> = state
            .legal_actions(0)
            .into_iter()
            .map(|a| (a, self.heuristic.eval(&state.successor(0, a))))
            .collect();

        let best = scores
            .iter()
            .map(|&(_, v)| v)
            .fold(f64::NEG_INFINITY, f64::max);

        scores
            .into_iter()
            .filter(|&(_, v)| v == best)
            .map(|(a, _)| a)
            .choose(rng)
    }
}
