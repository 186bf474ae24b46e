use std::fmt::{self, Debug};

use owo_colors::{OwoColorize, Style};

use super::{Cell, Grid};
use crate::env::{Board, Direction, Vec2D};
use crate::search::State;

/// Number of ghost moves a capsule keeps the ghosts vulnerable.
pub const SCARED_TIME: u32 = 40;
/// Paid by pacman for every move.
pub const TIME_PENALTY: f64 = 1.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const GHOST_SCORE: f64 = 200.0;
pub const WIN_SCORE: f64 = 500.0;
pub const LOSS_PENALTY: f64 = 500.0;

/// The outcome of a simulated game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    /// Respawn position after being eaten.
    pub start: Vec2D,
    pub pos: Vec2D,
    /// Remaining vulnerable moves.
    pub scared: u32,
}

impl Ghost {
    pub fn new(pos: Vec2D) -> Ghost {
        Ghost {
            start: pos,
            pos,
            scared: 0,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared > 0
    }
}

/// Holds the complete game state: maze, pacman (agent 0) and the ghosts
/// (agents 1..).
///
/// This also provides methods to execute moves and evaluate their outcome.
#[derive(Clone, PartialEq)]
pub struct Game {
    pub grid: Grid,
    pub pacman: Vec2D,
    pub ghosts: Vec<Ghost>,
    pub score: f64,
    /// Number of eaten food pellets.
    pub eaten: usize,
    pub outcome: Outcome,
}

impl Game {
    pub fn new(grid: Grid, pacman: Vec2D, ghosts: Vec<Ghost>) -> Game {
        Game {
            grid,
            pacman,
            ghosts,
            score: 0.0,
            eaten: 0,
            outcome: Outcome::None,
        }
    }

    /// Returns all moves that stay inside the maze.
    /// Pacman may stop, ghosts have to move.
    pub fn valid_moves(&self, agent: usize) -> Vec<Direction> {
        if self.outcome != Outcome::None {
            return Vec::new();
        }

        if agent == 0 {
            Direction::iter()
                .filter(|&d| d == Direction::Stop || self.grid.walkable(self.pacman.apply(d)))
                .collect()
        } else if let Some(ghost) = self.ghosts.get(agent - 1) {
            Direction::iter()
                .filter(|&d| d != Direction::Stop && self.grid.walkable(ghost.pos.apply(d)))
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Executes the move of a single agent.
    /// This also handles eating and collisions between pacman and ghosts.
    pub fn step(&mut self, agent: usize, dir: Direction) {
        assert_eq!(self.outcome, Outcome::None, "The game is already over");

        if agent == 0 {
            let p = self.pacman.apply(dir);
            assert!(self.grid.walkable(p), "Illegal move {:?} of pacman", dir);
            self.pacman = p;
            self.score -= TIME_PENALTY;

            match self.grid[p] {
                Cell::Food => {
                    self.grid[p] = Cell::Free;
                    self.score += FOOD_SCORE;
                    self.eaten += 1;
                    if self.grid.count(Cell::Food) == 0 {
                        self.score += WIN_SCORE;
                        self.outcome = Outcome::Win;
                    }
                }
                Cell::Capsule => {
                    self.grid[p] = Cell::Free;
                    for ghost in &mut self.ghosts {
                        ghost.scared = SCARED_TIME;
                    }
                }
                _ => {}
            }

            for i in 0..self.ghosts.len() {
                self.collide(i);
            }
        } else {
            let ghost = &mut self.ghosts[agent - 1];
            let p = ghost.pos.apply(dir);
            assert!(self.grid.walkable(p), "Illegal move {:?} of ghost {}", dir, agent);
            ghost.pos = p;
            ghost.scared = ghost.scared.saturating_sub(1);
            self.collide(agent - 1);
        }
    }

    fn collide(&mut self, ghost: usize) {
        let pacman = self.pacman;
        let ghost = &mut self.ghosts[ghost];
        if ghost.pos != pacman {
            return;
        }

        if ghost.is_scared() {
            self.score += GHOST_SCORE;
            ghost.pos = ghost.start;
            ghost.scared = 0;
        } else if self.outcome == Outcome::None {
            self.score -= LOSS_PENALTY;
            self.outcome = Outcome::Loss;
        }
    }
}

impl State for Game {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        self.valid_moves(agent)
    }

    fn successor(&self, agent: usize, action: Direction) -> Self {
        let mut game = self.clone();
        game.step(agent, action);
        game
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    fn is_loss(&self) -> bool {
        self.outcome == Outcome::Loss
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl Board for Game {
    fn position(&self) -> Vec2D {
        self.pacman
    }

    fn rewards(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Food).collect()
    }

    fn consumed(&self) -> usize {
        self.eaten
    }

    fn adversaries(&self) -> Vec<Vec2D> {
        self.ghosts.iter().map(|g| g.pos).collect()
    }

    fn vulnerability(&self) -> Vec<u32> {
        self.ghosts.iter().map(|g| g.scared).collect()
    }

    fn power_ups(&self) -> usize {
        self.grid.count(Cell::Capsule)
    }
}

impl Game {
    /// Parses the textual maze representation.
    ///
    /// Each line is a row, the first line is the top of the maze.
    /// Surrounding whitespace and empty lines are ignored.
    /// Ghosts are numbered in reading order.
    pub fn parse(txt: &str) -> Option<Game> {
        let rows: Vec<&str> = txt
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first()?.chars().count();
        if rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }

        let mut grid = Grid::new(width, height);
        let mut pacman = None;
        let mut ghosts = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let y = (height - i - 1) as i16;
            for (x, c) in row.chars().enumerate() {
                let p = Vec2D::new(x as _, y);
                grid[p] = match c {
                    '%' => Cell::Wall,
                    '.' => Cell::Food,
                    'o' => Cell::Capsule,
                    'P' => {
                        if pacman.replace(p).is_some() {
                            return None;
                        }
                        Cell::Free
                    }
                    'G' => {
                        ghosts.push(Ghost::new(p));
                        Cell::Free
                    }
                    ' ' => Cell::Free,
                    _ => return None,
                };
            }
        }

        Some(Game::new(grid, pacman?, ghosts))
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ghost_style(ghost: &Ghost) -> Style {
            if ghost.is_scared() {
                Style::new().bright_blue()
            } else {
                Style::new().red()
            }
        }

        writeln!(f, "Game {{")?;

        for y in (0..self.grid.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.grid.width as i16 {
                let p = Vec2D::new(x, y);
                if p == self.pacman {
                    write!(f, "{}", "P".yellow())?;
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.pos == p) {
                    write!(f, "{}", "G".style(ghost_style(ghost)))?;
                } else {
                    write!(f, "{:?}", self.grid[p])?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  Score: {} Ghosts: [", self.score)?;
        for (i, ghost) in self.ghosts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}: {})", i + 1, ghost.scared)?;
        }
        writeln!(f, "] {:?}", self.outcome)?;

        writeln!(f, "}}")
    }
}
