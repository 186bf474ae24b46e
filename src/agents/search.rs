use std::time::Instant;

use log::info;
use serde::{Deserialize, Deserializer};

use super::{CompositeHeuristic, ScoreHeuristic};
use crate::env::Board;
use crate::search::{Heuristic, Strategy, Tree};

/// Leaf evaluation used by the tree search.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluator {
    #[default]
    Score,
    Composite(CompositeHeuristic),
}

impl<S: Board> Heuristic<S> for Evaluator {
    fn eval(&self, state: &S) -> f64 {
        match self {
            Evaluator::Score => ScoreHeuristic.eval(state),
            Evaluator::Composite(h) => h.eval(state),
        }
    }
}

/// Agent that looks `depth` rounds ahead with the configured tree search.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchAgent {
    pub strategy: Strategy,
    /// Number of full rounds, one move of every agent each.
    #[serde(deserialize_with = "positive_depth")]
    pub depth: usize,
    pub heuristic: Evaluator,
}

fn positive_depth<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let depth = usize::deserialize(deserializer)?;
    if depth == 0 {
        return Err(serde::de::Error::custom(
            "the search depth has to be at least one round",
        ));
    }
    Ok(depth)
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self {
            strategy: Strategy::Minimax,
            depth: 2,
            heuristic: Evaluator::Score,
        }
    }
}

impl SearchAgent {
    pub fn new(strategy: Strategy, depth: usize, heuristic: Evaluator) -> SearchAgent {
        SearchAgent {
            strategy,
            depth,
            heuristic,
        }
    }

    /// Performs the tree search and returns the best move and its value.
    pub fn search<S: Board>(&self, state: &S) -> Option<(S::Action, f64)> {
        let start = Instant::now();

        let mut tree = Tree::new(self.depth, &self.heuristic, self.strategy.combine());
        let result = tree.search(state);

        info!(
            ">>> {:?} {} {:?}ms {:?} expanded={}",
            self.strategy,
            self.depth,
            start.elapsed().as_millis(),
            result,
            tree.expanded()
        );
        result
    }

    /// Chooses the move of the maximizing agent.
    pub fn decide<S: Board>(&self, state: &S) -> Option<S::Action> {
        self.search(state).map(|(action, _)| action)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Direction::{self, *};
    use crate::game::{layouts, Game};
    use crate::logging;
    use crate::search::{alphabeta, expectimax, minimax, Combine, State};

    fn agents(depth: usize, heuristic: Evaluator) -> [SearchAgent; 3] {
        [
            SearchAgent::new(Strategy::Minimax, depth, heuristic.clone()),
            SearchAgent::new(Strategy::AlphaBeta, depth, heuristic.clone()),
            SearchAgent::new(Strategy::Expectimax, depth, heuristic),
        ]
    }

    #[test]
    fn search_config() {
        let agent: SearchAgent =
            serde_json::from_str(r#"{"strategy":"alphabeta","depth":3,"heuristic":"score"}"#)
                .unwrap();
        assert_eq!(agent.strategy, Strategy::AlphaBeta);
        assert_eq!(agent.depth, 3);

        let agent: SearchAgent =
            serde_json::from_str(r#"{"heuristic":{"composite":{"capsules":2.0}}}"#).unwrap();
        assert_eq!(agent.strategy, Strategy::Minimax);
        assert_eq!(agent.depth, 2);
        assert!(matches!(agent.heuristic, Evaluator::Composite(_)));

        assert!(serde_json::from_str::<SearchAgent>(r#"{"width":3}"#).is_err());

        // at least one round
        assert!(serde_json::from_str::<SearchAgent>(r#"{"depth":0}"#).is_err());
        assert!(r#"{"search":{"depth":0}}"#.parse::<crate::agents::Agent>().is_err());
        let agent: SearchAgent = serde_json::from_str(r#"{"depth":1}"#).unwrap();
        assert_eq!(agent.depth, 1);
    }

    #[test]
    fn search_equivalence() {
        logging();
        for name in ["testClassic", "minimaxClassic", "trappedClassic"] {
            let game = Game::parse(layouts::get(name).unwrap()).unwrap();
            for heuristic in [Evaluator::Score, Evaluator::Composite(Default::default())] {
                for depth in 1..=3 {
                    let (_, expected) = minimax(&game, depth, &heuristic).unwrap();

                    let mut full = Tree::new(depth, &heuristic, Combine::Min);
                    let mut pruned = Tree::new(depth, &heuristic, Combine::MinWithBounds);
                    let (_, value) = pruned.search(&game).unwrap();
                    full.search(&game);

                    assert_eq!(value, expected, "{} {}", name, depth);
                    assert!(pruned.expanded() <= full.expanded());
                    assert_eq!(alphabeta(&game, depth, &heuristic).unwrap().1, expected);
                }
            }
        }
    }

    #[test]
    fn search_one_ply() {
        let game = Game::parse(layouts::MINIMAX_CLASSIC).unwrap();
        // one round without further ghost moves: pacman and each ghost once
        let brute = game
            .legal_actions(0)
            .into_iter()
            .map(|a| {
                let g1 = game.successor(0, a);
                worst(&g1, 1)
            })
            .fold(f64::NEG_INFINITY, f64::max);

        fn worst(game: &Game, agent: usize) -> f64 {
            if game.is_win() || game.is_loss() {
                return game.score;
            }
            if agent == game.num_agents() {
                return game.score;
            }
            game.legal_actions(agent)
                .into_iter()
                .map(|a| worst(&game.successor(agent, a), agent + 1))
                .fold(f64::INFINITY, f64::min)
        }

        for agent in &agents(1, Evaluator::Score)[..2] {
            let (_, value) = agent.search(&game).unwrap();
            assert_eq!(value, brute);
        }
    }

    #[test]
    fn search_idempotent() {
        let game = Game::parse(layouts::SMALL_CLASSIC).unwrap();
        for agent in agents(2, Evaluator::Composite(Default::default())) {
            let first = agent.decide(&game);
            assert!(first.is_some());
            assert_eq!(first, agent.decide(&game));
        }
    }

    #[test]
    fn search_avoids_ghost() {
        // moving east runs into the ghost
        let game = Game::parse(
            r#"
            %%%%%%%
            %.P G.%
            %%%%%%%"#,
        )
        .unwrap();
        for agent in agents(2, Evaluator::Score) {
            let dir = agent.decide(&game).unwrap();
            assert_ne!(dir, East, "{:?}", agent.strategy);
        }
    }

    #[test]
    fn search_trapped() {
        // minimax expects the worst and rushes to the ghost,
        // expectimax hopes for the ghosts to leave the way to the food
        let game = Game::parse(layouts::TRAPPED_CLASSIC).unwrap();
        let [minimax_agent, alphabeta_agent, expectimax_agent] = agents(3, Evaluator::Score);

        assert_eq!(minimax_agent.decide(&game), Some(East));
        assert_eq!(alphabeta_agent.decide(&game), Some(East));
        assert_eq!(expectimax_agent.decide(&game), Some(West));

        let (_, value) = expectimax(&game, 3, &ScoreHeuristic).unwrap();
        let (_, worst) = minimax(&game, 3, &ScoreHeuristic).unwrap();
        assert!(value > worst);
    }

    #[test]
    fn search_no_moves() {
        let mut game = Game::parse(layouts::TEST_CLASSIC).unwrap();
        game.outcome = crate::game::Outcome::Loss;
        for agent in agents(2, Evaluator::Score) {
            assert_eq!(agent.decide(&game), None::<Direction>);
        }
    }
}
