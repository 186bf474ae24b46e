use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::search::State;

/// Chooses uniformly among the legal moves of any agent.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn decide<S: State>(&self, state: &S, agent: usize) -> Option<S::Action> {
        self.decide_with(state, agent, &mut SmallRng::from_entropy())
    }

    pub fn decide_with<S: State, R: Rng + ?Sized>(
        &self,
        state: &S,
        agent: usize,
        rng: &mut R,
    ) -> Option<S::Action> {
        state.legal_actions(agent).choose(rng).copied()
    }
}
