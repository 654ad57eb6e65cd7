use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};
use crate::position::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Free,
    Start,
    Goal,
    Question,
    Info,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Free => '.',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Question => '?',
            Cell::Info => 'i',
        }
    }
}

/// Fixed-size rectangular grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Builds a grid from explicit rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(Error::InvalidLevel(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let height = rows.len();
        Ok(Self {
            rows: height,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Returns false (and leaves the grid untouched) when `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[pos.row * self.cols + pos.col] = cell;
        true
    }

    /// All positions holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(move |(i, _)| Position::new(i / cols, i % cols))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// The in-bounds, non-wall neighbour of `pos` in `dir`, if any.
    pub fn walkable_neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = pos.step(dir)?;
        match self.get(next) {
            Some(cell) if cell.is_walkable() => Some(next),
            _ => None,
        }
    }

    /// Flood fill over walkable cells. Index with `row * cols + col`.
    pub fn reachable_from(&self, start: Position) -> Vec<bool> {
        let mut seen = vec![false; self.cells.len()];
        if !matches!(self.get(start), Some(c) if c.is_walkable()) {
            return seen;
        }
        let mut q = VecDeque::new();
        seen[start.row * self.cols + start.col] = true;
        q.push_back(start);
        while let Some(pos) = q.pop_front() {
            for dir in Direction::ALL {
                if let Some(next) = self.walkable_neighbor(pos, dir) {
                    let idx = next.row * self.cols + next.col;
                    if !seen[idx] {
                        seen[idx] = true;
                        q.push_back(next);
                    }
                }
            }
        }
        seen
    }

    /// True when every walkable cell can be reached from `start`.
    pub fn is_connected_from(&self, start: Position) -> bool {
        let seen = self.reachable_from(start);
        self.cells
            .iter()
            .zip(&seen)
            .all(|(cell, reached)| !cell.is_walkable() || *reached)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: String = self.row(r).iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_respect_bounds() {
        let mut grid = Grid::new(2, 3, Cell::Free);
        assert!(grid.set(Position::new(1, 2), Cell::Goal));
        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::Goal));
        assert!(!grid.set(Position::new(2, 0), Cell::Wall));
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![Cell::Free, Cell::Free], vec![Cell::Free]];
        assert!(matches!(Grid::from_rows(rows), Err(Error::InvalidLevel(_))));
    }

    #[test]
    fn positions_of_scans_row_major() {
        let mut grid = Grid::new(3, 3, Cell::Free);
        grid.set(Position::new(2, 0), Cell::Question);
        grid.set(Position::new(0, 2), Cell::Question);
        let found: Vec<_> = grid.positions_of(Cell::Question).collect();
        assert_eq!(found, vec![Position::new(0, 2), Position::new(2, 0)]);
    }

    #[test]
    fn walled_off_pocket_is_not_connected() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Start, Cell::Wall, Cell::Free],
            vec![Cell::Free, Cell::Wall, Cell::Goal],
        ])
        .unwrap();
        assert!(!grid.is_connected_from(Position::ORIGIN));
    }

    #[test]
    fn display_uses_one_glyph_per_cell() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Start, Cell::Wall],
            vec![Cell::Question, Cell::Goal],
        ])
        .unwrap();
        assert_eq!(grid.to_string(), "S#\n?G\n");
    }
}
