use std::fmt;
use std::str::FromStr;

use rand::Rng;

mod composite;
pub use composite::*;
mod random;
pub use random::*;
mod reflex;
pub use reflex::*;
mod score;
pub use score::*;
mod search;
pub use search::*;

use crate::env::Board;

/// Agent configuration for pacman, usually given as JSON.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Search(SearchAgent),
    Reflex(ReflexAgent),
    Random,
}

impl Default for Agent {
    fn default() -> Self {
        Self::Search(SearchAgent::default())
    }
}

impl Agent {
    /// Chooses the next move of pacman (agent 0).
    pub fn step<S: Board>(&self, state: &S) -> Option<S::Action> {
        match self {
            Agent::Search(agent) => agent.decide(state),
            Agent::Reflex(agent) => agent.decide(state),
            Agent::Random => RandomAgent.decide(state, 0),
        }
    }

    /// Like [`Agent::step`] but takes randomness from `rng`.
    pub fn step_with<S: Board, R: Rng + ?Sized>(
        &self,
        state: &S,
        rng: &mut R,
    ) -> Option<S::Action> {
        match self {
            Agent::Search(agent) => agent.decide(state),
            Agent::Reflex(agent) => agent.decide_with(state, rng),
            Agent::Random => RandomAgent.decide_with(state, 0, rng),
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
