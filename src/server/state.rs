// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the session manager address and the gameplay settings handed to new sessions.
//! Used to share state between HTTP/WebSocket handlers and the actor system.

use actix::Addr;
use crate::config::game::GameSettings;
use crate::server::maze_session::server::MazeSessionManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the session manager actor (session registry, best times).
    pub manager: Addr<MazeSessionManager>,
    /// Settings every new maze session starts with.
    pub settings: GameSettings,
}

impl AppState {
    /// Create a new AppState with the given manager address and settings.
    pub fn new(manager: Addr<MazeSessionManager>, settings: GameSettings) -> Self {
        AppState { manager, settings }
    }
}
