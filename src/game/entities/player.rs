use serde::{Serialize, Deserialize};

use crate::game::types::Position;

/// The single maze runner of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    /// Coins picked up on the current level.
    pub coins_collected: u32,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            coins_collected: 0,
        }
    }
}
