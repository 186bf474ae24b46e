use crate::env::Board;
use crate::search::Heuristic;

/// Combines score, food proximity and ghost distances.
///
/// While any ghost is scared, pacman is drawn towards the ghosts and capsules
/// lose their value. Otherwise distance to the ghosts and remaining capsules
/// are rewarded.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeHeuristic {
    score: f64,
    food_distance: f64,
    eaten: f64,
    scared_time: f64,
    capsules: f64,
    ghost_distance: f64,
}

impl Default for CompositeHeuristic {
    fn default() -> Self {
        Self {
            score: 1.0,
            food_distance: 1.0,
            eaten: 1.0,
            scared_time: 1.0,
            capsules: 1.0,
            ghost_distance: 1.0,
        }
    }
}

impl<S: Board> Heuristic<S> for CompositeHeuristic {
    fn eval(&self, state: &S) -> f64 {
        let pos = state.position();

        let food_distance: u64 = state.rewards().into_iter().map(|p| pos.distance(p)).sum();
        let food_distance = if food_distance > 0 {
            1.0 / food_distance as f64
        } else {
            0.0
        };

        let ghost_distance = state
            .adversaries()
            .into_iter()
            .map(|p| pos.distance(p))
            .sum::<u64>() as f64;
        let scared_time = state.vulnerability().into_iter().map(u64::from).sum::<u64>() as f64;
        let capsules = state.power_ups() as f64;

        let common = self.score * state.score()
            + self.food_distance * food_distance
            + self.eaten * state.consumed() as f64;

        if scared_time > 0.0 {
            common + self.scared_time * scared_time
                - self.capsules * capsules
                - self.ghost_distance * ghost_distance
        } else {
            common + self.ghost_distance * ghost_distance + self.capsules * capsules
        }
    }
}
