use std::ops::{Index, IndexMut};

use owo_colors::OwoColorize;

use crate::env::Vec2D;

/// Represents a single tile of the board
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Food,
    /// Power-up that makes the ghosts vulnerable
    Capsule,
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Cell::Free => write!(f, " "),
            Cell::Wall => write!(f, "{}", "%".blue()),
            Cell::Food => write!(f, "{}", ".".white()),
            Cell::Capsule => write!(f, "{}", "o".bright_white()),
        }
    }
}

/// The maze as grid of walls, food and capsules.
/// Position (0, 0) is the bottom left corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Creates a new empty grid with the provided dimensions.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Returns if the position is within the grid.
    pub fn has(&self, p: Vec2D) -> bool {
        p.within(self.width, self.height)
    }

    /// Returns if an agent can stand on this position.
    pub fn walkable(&self, p: Vec2D) -> bool {
        self.has(p) && self[p] != Cell::Wall
    }

    /// Positions of all cells of the given kind, bottom row first.
    pub fn positions(&self, kind: Cell) -> impl Iterator<Item = Vec2D> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == kind)
            .map(move |(i, _)| Vec2D::new((i % width) as _, (i / width) as _))
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

impl Index<Vec2D> for Grid {
    type Output = Cell;

    fn index(&self, p: Vec2D) -> &Self::Output {
        assert!(self.has(p));
        &self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl IndexMut<Vec2D> for Grid {
    fn index_mut(&mut self, p: Vec2D) -> &mut Self::Output {
        assert!(self.has(p));
        &mut self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {{")?;
        for y in (0..self.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.width as i16 {
                write!(f, "{:?}", self[Vec2D::new(x, y)])?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::v2;

    #[test]
    fn grid_cells() {
        let mut grid = Grid::new(4, 3);
        grid[v2(0, 0)] = Cell::Wall;
        grid[v2(3, 2)] = Cell::Food;
        grid[v2(1, 2)] = Cell::Food;
        grid[v2(2, 1)] = Cell::Capsule;
        println!("{:?}", grid);

        assert!(grid.has(v2(3, 2)));
        assert!(!grid.has(v2(4, 2)));
        assert!(!grid.has(v2(0, -1)));
        assert!(!grid.walkable(v2(0, 0)));
        assert!(grid.walkable(v2(1, 0)));

        assert_eq!(grid.count(Cell::Food), 2);
        assert_eq!(
            grid.positions(Cell::Food).collect::<Vec<_>>(),
            vec![v2(1, 2), v2(3, 2)]
        );
        assert_eq!(grid.positions(Cell::Capsule).collect::<Vec<_>>(), vec![v2(2, 1)]);
    }
}
