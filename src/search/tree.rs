use super::{Heuristic, State};

/// How the values of an adversary's children are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Minimum of all children.
    Min,
    /// Minimum with alpha-beta cutoffs.
    MinWithBounds,
    /// Mean over all children.
    Average,
}

/// Depth limited search over the turns of all agents.
///
/// One round consists of a move of every agent, starting with the maximizing
/// agent 0. The depth limit counts rounds, so the maximizing agent moves
/// exactly `depth` times on every path to a leaf (unless the game ends).
///
/// A tree is meant to be used for a single search.
/// It only tracks the number of expanded states.
#[derive(Debug)]
pub struct Tree<'a, H: ?Sized> {
    depth: usize,
    heuristic: &'a H,
    combine: Combine,
    expanded: usize,
}

impl<'a, H: ?Sized> Tree<'a, H> {
    pub fn new(depth: usize, heuristic: &'a H, combine: Combine) -> Tree<'a, H> {
        assert!(depth > 0, "The search depth has to be at least one round");
        Tree {
            depth,
            heuristic,
            combine,
            expanded: 0,
        }
    }

    /// Number of successor states generated so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the first action of agent 0 with the strictly highest value.
    pub fn search<S: State>(&mut self, state: &S) -> Option<(S::Action, f64)>
    where
        H: Heuristic<S>,
    {
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(S::Action, f64)> = None;

        for action in state.legal_actions(0) {
            let next = self.expand(state, 0, action);
            let value = self.next_value(&next, 0, 0, alpha, beta);
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((action, value));
            }
            if self.combine == Combine::MinWithBounds {
                if value > beta {
                    break;
                }
                alpha = alpha.max(value);
            }
        }
        best
    }

    fn expand<S: State>(&mut self, state: &S, agent: usize, action: S::Action) -> S {
        self.expanded += 1;
        state.successor(agent, action)
    }

    /// Value of `state` after `agent` has moved.
    /// Hands the turn to the next adversary or starts the next round.
    fn next_value<S: State>(
        &mut self,
        state: &S,
        round: usize,
        agent: usize,
        alpha: f64,
        beta: f64,
    ) -> f64
    where
        H: Heuristic<S>,
    {
        let next = (agent + 1) % state.num_agents();
        if next == 0 {
            self.max_value(state, round + 1, alpha, beta)
        } else {
            self.adversary_value(state, round, next, alpha, beta)
        }
    }

    fn max_value<S: State>(&mut self, state: &S, round: usize, mut alpha: f64, beta: f64) -> f64
    where
        H: Heuristic<S>,
    {
        if state.is_win() || state.is_loss() || round >= self.depth {
            return self.heuristic.eval(state);
        }

        let mut value = f64::NEG_INFINITY;
        for action in state.legal_actions(0) {
            let next = self.expand(state, 0, action);
            value = value.max(self.next_value(&next, round, 0, alpha, beta));

            if self.combine == Combine::MinWithBounds {
                // cut against the bound of the caller
                if value > beta {
                    return value;
                }
                alpha = alpha.max(value);
            }
        }
        value
    }

    fn adversary_value<S: State>(
        &mut self,
        state: &S,
        round: usize,
        agent: usize,
        alpha: f64,
        mut beta: f64,
    ) -> f64
    where
        H: Heuristic<S>,
    {
        if state.is_win() || state.is_loss() {
            return self.heuristic.eval(state);
        }

        let actions = state.legal_actions(agent);
        match self.combine {
            Combine::Average => {
                // Not covered by the terminal test, counts as neutral.
                if actions.is_empty() {
                    return 0.0;
                }
                let mut total = 0.0;
                for &action in &actions {
                    let next = self.expand(state, agent, action);
                    total += self.next_value(&next, round, agent, alpha, beta);
                }
                total / actions.len() as f64
            }
            Combine::Min | Combine::MinWithBounds => {
                let mut value = f64::INFINITY;
                for action in actions {
                    let next = self.expand(state, agent, action);
                    value = value.min(self.next_value(&next, round, agent, alpha, beta));

                    if self.combine == Combine::MinWithBounds {
                        if value < alpha {
                            return value;
                        }
                        beta = beta.min(value);
                    }
                }
                value
            }
        }
    }
}
