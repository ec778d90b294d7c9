//! Main entry point for the maze runner.
//!
//! By default, starts the actor system and launches the HTTP server with the maze
//! WebSocket endpoint. With `--local`, plays the maze in the terminal instead.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::ServerConfig;
use server::maze_session::server::MazeSessionManager;

pub mod config;
mod server;
mod game;


fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    if std::env::args().any(|arg| arg == "--local") {
        return game::demo::game_loop::run_game_loop(config.settings);
    }

    actix_web::rt::System::new().block_on(run_server(config))
}

async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    // Start the MazeSessionManager actor (session registry and best times).
    let manager = MazeSessionManager::new(&config.settings).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(manager, config.settings.clone()));

    info!("Listening on {}:{}", config.host, config.port);

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
