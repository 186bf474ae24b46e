mod tree;
pub use tree::*;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// The game as seen by the tree search.
///
/// Agent 0 is always the maximizing agent, all other agents are adversaries.
/// States are immutable snapshots, every move produces a new state.
pub trait State: Sized {
    type Action: Copy + PartialEq + Debug;

    /// Number of agents taking turns, at least 1.
    fn num_agents(&self) -> usize;
    /// Legal actions of an agent, empty if the game is over.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;
    /// State after `agent` performed `action`.
    fn successor(&self, agent: usize, action: Self::Action) -> Self;
    fn is_win(&self) -> bool;
    fn is_loss(&self) -> bool;
    /// Intrinsic score of the state.
    fn score(&self) -> f64;
}

/// A heuristic that evaluates the game state at the leafs of a tree search.
pub trait Heuristic<S>: Debug {
    fn eval(&self, state: &S) -> f64;
}

/// Tree search algorithm used to pick the maximizing agent's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Adversaries minimize.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
    /// Adversaries choose uniformly at random.
    Expectimax,
}

impl Strategy {
    pub fn combine(self) -> Combine {
        match self {
            Strategy::Minimax => Combine::Min,
            Strategy::AlphaBeta => Combine::MinWithBounds,
            Strategy::Expectimax => Combine::Average,
        }
    }
}

/// Runs the selected tree search and returns the action of agent 0 with the
/// best backed-up value.
///
/// `depth` counts full rounds, one move of every agent each.
/// Returns `None` if agent 0 has no legal actions.
pub fn decide<S: State, H: Heuristic<S> + ?Sized>(
    state: &S,
    strategy: Strategy,
    depth: usize,
    heuristic: &H,
) -> Option<S::Action> {
    Tree::new(depth, heuristic, strategy.combine())
        .search(state)
        .map(|(action, _)| action)
}

/// Minimax tree search.
///
/// @see https://en.wikipedia.org/wiki/Minimax
pub fn minimax<S: State, H: Heuristic<S> + ?Sized>(
    state: &S,
    depth: usize,
    heuristic: &H,
) -> Option<(S::Action, f64)> {
    Tree::new(depth, heuristic, Combine::Min).search(state)
}

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
pub fn alphabeta<S: State, H: Heuristic<S> + ?Sized>(
    state: &S,
    depth: usize,
    heuristic: &H,
) -> Option<(S::Action, f64)> {
    Tree::new(depth, heuristic, Combine::MinWithBounds).search(state)
}

/// Expectimax tree search, adversaries are modeled as uniform random agents.
pub fn expectimax<S: State, H: Heuristic<S> + ?Sized>(
    state: &S,
    depth: usize,
    heuristic: &H,
) -> Option<(S::Action, f64)> {
    Tree::new(depth, heuristic, Combine::Average).search(state)
}
