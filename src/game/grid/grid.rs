//! Maze grid storage.
//!
//! Cells live in a flat vector addressed by `row * cols + col`. Each cell carries
//! four wall flags (top, right, bottom, left) and a `visited` flag used while carving.

use std::collections::VecDeque;

use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// top, right, bottom, left; `true` = wall present.
    pub walls: [bool; 4],
    #[serde(skip)]
    pub visited: bool,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid of `rows x cols` cells with every wall present.
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` when out of bounds.
    pub fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        match self.index(pos) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// In-bounds neighbor of `pos` in `direction`, ignoring walls.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = match direction {
            Direction::Up => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Right => Position::new(pos.row, pos.col + 1),
            Direction::Down => Position::new(pos.row + 1, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.checked_sub(1)?),
        };
        if self.contains(next) { Some(next) } else { None }
    }

    /// Whether the wall on the `direction` side of `pos` is present.
    /// Out-of-bounds positions count as fully walled.
    pub fn has_wall(&self, pos: Position, direction: Direction) -> bool {
        self.cell(pos).map_or(true, |cell| cell.has_wall(direction))
    }

    /// Neighbor reachable from `pos` through an open passage.
    pub fn passage(&self, pos: Position, direction: Direction) -> Option<Position> {
        if self.has_wall(pos, direction) {
            return None;
        }
        self.neighbor(pos, direction)
    }

    /// Remove the wall between `pos` and its neighbor in `direction`, on both sides.
    /// Returns the neighbor, or `None` if there is none.
    pub(crate) fn carve(&mut self, pos: Position, direction: Direction) -> Option<Position> {
        let next = self.neighbor(pos, direction)?;
        if let Some(cell) = self.cell_mut(pos) {
            cell.walls[direction.wall_index()] = false;
        }
        if let Some(cell) = self.cell_mut(next) {
            cell.walls[direction.opposite().wall_index()] = false;
        }
        Some(next)
    }

    /// Number of open passages between adjacent cells. Each passage is counted once.
    pub fn open_passages(&self) -> usize {
        (0..self.cells.len())
            .map(|i| self.position(i))
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.passage(pos, dir).is_some())
                    .count()
            })
            .sum()
    }

    /// Breadth-first shortest path from `from` to `to` through open passages.
    /// Both ends are included. `None` if either end is out of bounds or unreachable.
    pub fn shortest_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        let start = self.index(from)?;
        let goal = self.index(to)?;

        let mut came_from: Vec<Option<usize>> = vec![None; self.cells.len()];
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                break;
            }
            let pos = self.position(current);
            for dir in Direction::ALL {
                if let Some(next) = self.passage(pos, dir).and_then(|p| self.index(p)) {
                    if !seen[next] {
                        seen[next] = true;
                        came_from[next] = Some(current);
                        queue.push_back(next);
                    }
                }
            }
        }

        if !seen[goal] {
            return None;
        }

        let mut path = vec![self.position(goal)];
        let mut current = goal;
        while let Some(prev) = came_from[current] {
            path.push(self.position(prev));
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Directions to follow along a path, as produced by `shortest_path`.
    pub fn path_directions(&self, path: &[Position]) -> Vec<Direction> {
        path.windows(2)
            .filter_map(|step| {
                Direction::ALL
                    .into_iter()
                    .find(|&dir| self.neighbor(step[0], dir) == Some(step[1]))
            })
            .collect()
    }
}
