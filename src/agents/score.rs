use crate::search::{Heuristic, State};

/// Evaluates a state by its intrinsic score alone.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct ScoreHeuristic;

impl<S: State> Heuristic<S> for ScoreHeuristic {
    fn eval(&self, state: &S) -> f64 {
        state.score()
    }
}
