use actix::prelude::*;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use crate::game::best_times::LevelBestTimes;
use crate::game::state::SessionSnapshot;
use crate::game::types::Direction;

// Client -> server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Move(Direction),
    /// Raw key name (`ArrowUp`, `w`, ...). Unmapped keys are ignored.
    Key(String),
    Restart,
    NextLevel,
    Ping,
}

// Server -> client
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    State(SessionSnapshot),
    LevelCompleted {
        level: u32,
        millis: u64,
        /// Rank in the best-time table, if the run placed.
        rank: Option<usize>,
    },
    Error {
        code: String,
        message: String,
        context: Option<Value>,
    },
}

impl ServerWsMessage {
    pub fn state(snapshot: SessionSnapshot) -> Self {
        Self::State(snapshot)
    }
    pub fn level_completed(level: u32, millis: u64, rank: Option<usize>) -> Self {
        Self::LevelCompleted { level, millis, rank }
    }
    pub fn error(code: &str, message: &str, context: Option<Value>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context,
        }
    }
}

/// A WebSocket session joined.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub session_id: Uuid,
    pub player: String,
}

/// A WebSocket session left.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub session_id: Uuid,
}

/// A level was completed; returns the best-time rank if it placed.
#[derive(Message)]
#[rtype(result = "Option<usize>")]
pub struct RecordLevelTime {
    pub session_id: Uuid,
    pub player: String,
    pub level: u32,
    pub time: Duration,
}

#[derive(Message)]
#[rtype(result = "Vec<LevelBestTimes>")]
pub struct GetBestTimes;

#[derive(Message)]
#[rtype(result = "Result<LevelBestTimes, String>")]
pub struct GetLevelBestTimes {
    pub level: u32,
}
