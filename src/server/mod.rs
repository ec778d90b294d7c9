// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Maze sessions (one per connection) and the shared session manager
//! - Best-time HTTP queries
//! - Error response helpers

pub mod state;
pub mod router;
pub mod maze_session;
pub mod ws_error;
pub mod best_times;
