//! Perfect-maze generation.
//!
//! Randomized iterative depth-first carving: starting from `(0, 0)`, repeatedly peek the
//! top of an explicit stack, knock down the wall toward a random unvisited neighbor and
//! push it, or pop when no unvisited neighbor is left. Every cell is pushed exactly once,
//! so the carved passages form a spanning tree of the grid graph.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::grid::grid::Grid;
use crate::game::types::{Direction, Position};

/// Generate a perfect maze of `rows x cols` cells.
///
/// Dimensions below 1 are clamped to 1 so the stack always has a seed cell.
pub fn generate_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    if rows == 0 || cols == 0 {
        warn!("[Generator] Clamping degenerate maze size {}x{} to at least 1x1", rows, cols);
    }
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut grid = Grid::filled(rows, cols);
    let start = Position::new(0, 0);
    let mut stack = vec![start];
    if let Some(cell) = grid.cell_mut(start) {
        cell.visited = true;
    }

    while let Some(&current) = stack.last() {
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| {
                grid.neighbor(current, dir)
                    .and_then(|next| grid.cell(next))
                    .is_some_and(|cell| !cell.visited)
            })
            .collect();

        match candidates.choose(rng) {
            Some(&dir) => {
                if let Some(next) = grid.carve(current, dir) {
                    if let Some(cell) = grid.cell_mut(next) {
                        cell.visited = true;
                    }
                    stack.push(next);
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(
        "[Generator] Carved {}x{} maze with {} passages",
        rows,
        cols,
        grid.open_passages()
    );
    grid
}
