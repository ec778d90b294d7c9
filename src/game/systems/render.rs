//! Maze rendering system (terminal).
//!
//! This module draws a session as text for the local demo and for trace logs.

use std::fmt::Write;

use crate::game::state::MazeSession;
use crate::game::types::{Direction, Position};

/// Render the maze, player (`P`), exit (`E`) and coins (`o`) as ASCII art.
pub fn render_ascii(session: &MazeSession) -> String {
    let grid = session.grid();
    let mut out = String::new();

    for row in 0..grid.rows() {
        // Top edge of this row.
        for col in 0..grid.cols() {
            out.push('+');
            let pos = Position::new(row, col);
            out.push_str(if grid.has_wall(pos, Direction::Up) { "---" } else { "   " });
        }
        out.push_str("+\n");

        // Cell interiors with their left walls.
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            out.push(if grid.has_wall(pos, Direction::Left) { '|' } else { ' ' });
            let symbol = if pos == session.player() {
                'P'
            } else if pos == session.exit() {
                'E'
            } else if session.coins().contains(&pos) {
                'o'
            } else {
                ' '
            };
            let _ = write!(out, " {} ", symbol);
        }
        let last = Position::new(row, grid.cols().saturating_sub(1));
        out.push(if grid.has_wall(last, Direction::Right) { '|' } else { ' ' });
        out.push('\n');
    }

    // Bottom edge of the last row.
    let last_row = grid.rows().saturating_sub(1);
    for col in 0..grid.cols() {
        out.push('+');
        let pos = Position::new(last_row, col);
        out.push_str(if grid.has_wall(pos, Direction::Down) { "---" } else { "   " });
    }
    out.push_str("+\n");
    out
}

/// One-line status for the current level.
pub fn render_status(session: &MazeSession) -> String {
    format!(
        "Level: {}  Coins: {}  Remaining: {}  Time: {:.1}s",
        session.level(),
        session.coins_collected(),
        session.coins().len(),
        session.elapsed().as_secs_f32()
    )
}
