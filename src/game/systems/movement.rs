//! Player movement system.
//!
//! This module moves the player through open passages and resolves what the
//! destination cell holds (coin, exit).

use crate::game::entities::try_pickup_coin;
use crate::game::state::MazeSession;
use crate::game::types::{Direction, LevelState, MoveOutcome};

/// Move the player one cell in `direction` if no wall is in the way.
///
/// A blocked move leaves position, coins and level state untouched.
pub fn move_player(session: &mut MazeSession, direction: Direction) -> MoveOutcome {
    let Some(next) = session.grid.passage(session.player.pos, direction) else {
        return MoveOutcome::Blocked;
    };

    session.player.pos = next;

    let coin_collected = try_pickup_coin(&mut session.coins, next);
    if coin_collected {
        session.player.coins_collected += 1;
    }

    if next == session.exit {
        session.state = LevelState::Completed;
        MoveOutcome::Completed { coin_collected }
    } else {
        MoveOutcome::Moved { coin_collected }
    }
}
