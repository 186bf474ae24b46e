//! Grid chase game used to drive and test the tree search agents.

mod game;
pub use game::*;
mod grid;
pub use grid::*;
pub mod layouts;
