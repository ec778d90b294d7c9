/// Maze session manager actor.
///
/// Tracks connected maze sessions and owns the shared best-time table.
/// Each session plays its own maze; only completion times cross session boundaries.

use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::game::GameSettings;
use crate::game::best_times::BestTimes;
use crate::server::maze_session::messages::{
    Connect, Disconnect, GetBestTimes, GetLevelBestTimes, RecordLevelTime,
};

pub struct MazeSessionManager {
    /// Connected sessions and their player names.
    sessions: HashMap<Uuid, String>,
    best_times: BestTimes,
}

impl MazeSessionManager {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            sessions: HashMap::new(),
            best_times: BestTimes::new(settings.best_times_per_level),
        }
    }
}

impl Actor for MazeSessionManager {
    type Context = Context<Self>;
}

impl Handler<Connect> for MazeSessionManager {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        self.sessions.insert(msg.session_id, msg.player.clone());
        info!(
            "[Manager] Session {} connected as '{}' ({} active)",
            msg.session_id,
            msg.player,
            self.sessions.len()
        );
    }
}

impl Handler<Disconnect> for MazeSessionManager {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        match self.sessions.remove(&msg.session_id) {
            Some(player) => info!(
                "[Manager] Session {} ('{}') disconnected ({} active)",
                msg.session_id,
                player,
                self.sessions.len()
            ),
            None => warn!("[Manager] Disconnect for unknown session {}", msg.session_id),
        }
    }
}

impl Handler<RecordLevelTime> for MazeSessionManager {
    type Result = MessageResult<RecordLevelTime>;

    fn handle(&mut self, msg: RecordLevelTime, _: &mut Context<Self>) -> Self::Result {
        if !self.sessions.contains_key(&msg.session_id) {
            debug!("[Manager] Recording time for unregistered session {}", msg.session_id);
        }
        let rank = self.best_times.record(msg.level, &msg.player, msg.time);
        if let Some(rank) = rank {
            info!(
                "[Manager] '{}' ranked #{} on level {} ({} ms)",
                msg.player,
                rank,
                msg.level,
                msg.time.as_millis()
            );
        }
        MessageResult(rank)
    }
}

impl Handler<GetBestTimes> for MazeSessionManager {
    type Result = MessageResult<GetBestTimes>;

    fn handle(&mut self, _: GetBestTimes, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.best_times.snapshot())
    }
}

impl Handler<GetLevelBestTimes> for MazeSessionManager {
    type Result = MessageResult<GetLevelBestTimes>;

    fn handle(&mut self, msg: GetLevelBestTimes, _: &mut Context<Self>) -> Self::Result {
        MessageResult(
            self.best_times
                .for_level(msg.level)
                .ok_or_else(|| format!("No best times recorded for level {}", msg.level)),
        )
    }
}
