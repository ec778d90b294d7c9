//! HTTP and WebSocket routing configuration.
//!
//! Defines the maze WebSocket endpoint and the best-time queries.

use actix_web::web;
use crate::server::maze_session::session::ws_maze;
use crate::server::best_times::{all_best_times, level_best_times};

/// Configure the application's HTTP/WebSocket routes.
///
/// Each WebSocket connection is handled by its own maze session actor.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/maze")
            .to(ws_maze)
    )
    .service(
        web::resource("/best-times")
            .route(web::get().to(all_best_times))
    )
    .service(
        web::resource("/best-times/{level}")
            .route(web::get().to(level_best_times))
    );
}
