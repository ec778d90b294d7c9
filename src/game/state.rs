//! Maze session state.
//!
//! A `MazeSession` owns everything belonging to one playable level: the grid, the
//! player, the coin set and the exit. Starting a level replaces all of them at once.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::config::game::GameSettings;
use crate::game::entities::{Player, place_coins};
use crate::game::grid::{Grid, generate_maze};
use crate::game::systems::move_player;
use crate::game::types::{Direction, LevelState, MoveOutcome, Position};

/// Start cell of every level.
pub const START: Position = Position { row: 0, col: 0 };

pub struct MazeSession {
    pub(crate) settings: GameSettings,
    pub(crate) rng: StdRng,
    pub(crate) level: u32,
    pub(crate) grid: Grid,
    pub(crate) player: Player,
    pub(crate) exit: Position,
    pub(crate) coins: HashSet<Position>,
    pub(crate) state: LevelState,
    pub(crate) started_at: Instant,
    pub(crate) completed_in: Option<Duration>,
}

/// Read-only view of a session, sent to renderers each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: u32,
    pub rows: usize,
    pub cols: usize,
    /// Wall flags per cell in row-major order: top, right, bottom, left.
    pub walls: Vec<[bool; 4]>,
    pub player: Position,
    pub exit: Position,
    pub coins: Vec<Position>,
    pub coins_collected: u32,
    pub state: LevelState,
}

impl MazeSession {
    /// New session at level 1, seeded from the operating system.
    pub fn new(settings: GameSettings) -> Self {
        Self::from_rng(settings, StdRng::from_os_rng())
    }

    /// New session at level 1 with a deterministic random source.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::from_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn from_rng(settings: GameSettings, rng: StdRng) -> Self {
        let mut session = MazeSession {
            settings,
            rng,
            level: 1,
            grid: Grid::filled(1, 1),
            player: Player::new(START),
            exit: START,
            coins: HashSet::new(),
            state: LevelState::Playing,
            started_at: Instant::now(),
            completed_in: None,
        };
        session.start_level(1);
        session
    }

    /// (Re)initialize the session for `level`. Level 0 is treated as 1.
    pub fn start_level(&mut self, level: u32) {
        let level = level.max(1);
        let (rows, cols) = self.settings.grid_dimensions(level);
        let grid = generate_maze(rows, cols, &mut self.rng);
        let exit = Position::new(grid.rows() - 1, grid.cols() - 1);

        self.level = level;
        self.grid = grid;
        self.exit = exit;
        self.player = Player::new(START);
        self.state = LevelState::Playing;
        self.started_at = Instant::now();
        self.completed_in = None;
        self.place_coins();

        info!(
            "[MazeSession] Level {} started: {}x{} grid, {} coins",
            self.level,
            self.grid.rows(),
            self.grid.cols(),
            self.coins.len()
        );
    }

    /// Scatter coins for the current level, discarding previous coins and progress.
    pub fn place_coins(&mut self) {
        let forbidden = [START, self.exit];
        self.coins = place_coins(&self.grid, self.level, &forbidden, &self.settings, &mut self.rng);
        self.player.coins_collected = 0;
    }

    /// Attempt a single-cell move. Walls reject the move without touching any state.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state == LevelState::Completed {
            return MoveOutcome::Ignored;
        }
        let outcome = move_player(self, direction);
        if let MoveOutcome::Completed { .. } = outcome {
            let elapsed = self.started_at.elapsed();
            self.completed_in = Some(elapsed);
            info!(
                "[MazeSession] Level {} completed in {} ms with {} coins",
                self.level,
                elapsed.as_millis(),
                self.player.coins_collected
            );
        }
        debug!("[MazeSession] {:?} -> {:?} at {:?}", direction, outcome, self.player.pos);
        outcome
    }

    /// Interpret a key name; unmapped keys are a no-op.
    pub fn try_key(&mut self, key: &str) -> Option<MoveOutcome> {
        Direction::from_key(key).map(|direction| self.try_move(direction))
    }

    /// Restart the current level with a fresh maze.
    pub fn reset(&mut self) {
        self.start_level(self.level);
    }

    /// Start the next level. Called once the current level is completed.
    pub fn advance(&mut self) {
        self.start_level(self.level + 1);
    }

    /// Jump to the next level regardless of the current level state.
    pub fn skip_level(&mut self) {
        info!("[MazeSession] Level {} skipped", self.level);
        self.start_level(self.level + 1);
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn player(&self) -> Position {
        self.player.pos
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn coins(&self) -> &HashSet<Position> {
        &self.coins
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn coins_collected(&self) -> u32 {
        self.player.coins_collected
    }

    pub fn level_state(&self) -> LevelState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == LevelState::Completed
    }

    /// Time spent on the current level so far, frozen once it is completed.
    pub fn elapsed(&self) -> Duration {
        self.completed_in.unwrap_or_else(|| self.started_at.elapsed())
    }

    pub fn completed_in(&self) -> Option<Duration> {
        self.completed_in
    }

    /// Remaining path from the player to the exit, as moves.
    pub fn hint(&self) -> Vec<Direction> {
        self.grid
            .shortest_path(self.player.pos, self.exit)
            .map(|path| self.grid.path_directions(&path))
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut coins: Vec<Position> = self.coins.iter().copied().collect();
        coins.sort();
        SessionSnapshot {
            level: self.level,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            walls: self.grid.cells().iter().map(|c| c.walls).collect(),
            player: self.player.pos,
            exit: self.exit,
            coins,
            coins_collected: self.player.coins_collected,
            state: self.state,
        }
    }
}
