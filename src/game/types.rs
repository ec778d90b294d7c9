use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the four cardinal moves. The discriminant is the wall index on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Index into a cell's `walls` array: top, right, bottom, left.
    pub fn wall_index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Map a key name (`ArrowUp`, `w`, ...) to a direction. Unknown keys map to `None`.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key.trim().to_lowercase().as_str() {
            "arrowup" | "w" => Some(Direction::Up),
            "arrowright" | "d" => Some(Direction::Right),
            "arrowdown" | "s" => Some(Direction::Down),
            "arrowleft" | "a" => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Lifecycle of a single level instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    Playing,
    Completed,
}

/// Result of a single `try_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A wall (or the grid edge) is in the way. Nothing changed.
    Blocked,
    Moved { coin_collected: bool },
    /// The move landed on the exit.
    Completed { coin_collected: bool },
    /// The level is already completed; moves are ignored until the next level starts.
    Ignored,
}

impl MoveOutcome {
    pub fn changed_position(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Completed { .. })
    }
}
