/// WebSocket session handler for a single maze run.
///
/// Each connection owns its own `MazeSession`: moves from the client are applied
/// synchronously inside this actor, and a fresh snapshot is sent back after every
/// state change. Level completion is reported to the manager for the best-time table,
/// and the next level starts after a short cosmetic delay.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse, http::StatusCode};
use actix_web_actors::ws;
use log::{debug, error, info, trace};
use std::borrow::Cow;
use std::time::Duration;
use uuid::Uuid;

use super::messages::{ClientWsMessage, Connect, Disconnect, RecordLevelTime, ServerWsMessage};
use super::server::MazeSessionManager;
use crate::game::state::MazeSession;
use crate::game::systems::render_ascii;
use crate::game::types::{Direction, MoveOutcome};
use crate::server::ws_error::{
    http_error_response, ws_error_message, INVALID_COMMAND, INVALID_PLAYER_NAME, SERIALIZATION_FAILED,
};

/// Longest accepted player name, in characters.
pub const MAX_PLAYER_NAME_LEN: usize = 32;

pub struct MazeSessionActor {
    pub session_id: Uuid,
    pub player: String,
    pub session: MazeSession,
    pub manager: Addr<MazeSessionManager>,
    advance_timer: Option<SpawnHandle>,
}

impl MazeSessionActor {
    pub fn new(player: String, session: MazeSession, manager: Addr<MazeSessionManager>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            player,
            session,
            manager,
            advance_timer: None,
        }
    }

    /// Serialize and send a message to the client.
    fn send_message(&self, ctx: &mut ws::WebsocketContext<Self>, msg: &ServerWsMessage) {
        match serde_json::to_string(msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[MazeSession] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(ws_error_message(SERIALIZATION_FAILED, "Internal server error", None));
            }
        }
    }

    fn send_state(&self, ctx: &mut ws::WebsocketContext<Self>) {
        trace!("[MazeSession] {}\n{}", self.session_id, render_ascii(&self.session));
        self.send_message(ctx, &ServerWsMessage::state(self.session.snapshot()));
    }

    /// Drop a pending level advance, e.g. when the player restarts first.
    fn cancel_advance(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(handle) = self.advance_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    fn apply_move(&mut self, direction: Direction, ctx: &mut ws::WebsocketContext<Self>) {
        match self.session.try_move(direction) {
            MoveOutcome::Blocked | MoveOutcome::Ignored => {}
            MoveOutcome::Moved { .. } => self.send_state(ctx),
            MoveOutcome::Completed { .. } => {
                self.send_state(ctx);
                self.on_level_completed(ctx);
            }
        }
    }

    /// Report the completion time, then schedule the next level.
    fn on_level_completed(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let level = self.session.level();
        let time = self.session.elapsed();
        let millis = u64::try_from(time.as_millis()).unwrap_or(u64::MAX);

        self.manager
            .send(RecordLevelTime {
                session_id: self.session_id,
                player: self.player.clone(),
                level,
                time,
            })
            .into_actor(self)
            .map(move |res, act, ctx| {
                let rank = res.unwrap_or_else(|e| {
                    error!("[MazeSession] Failed to record level time: {}", e);
                    None
                });
                act.send_message(ctx, &ServerWsMessage::level_completed(level, millis, rank));
            })
            .spawn(ctx);

        let delay = Duration::from_millis(self.session.settings().level_advance_delay_ms);
        self.cancel_advance(ctx);
        let handle = ctx.run_later(delay, |act, ctx| {
            act.advance_timer = None;
            if act.session.is_completed() {
                act.session.advance();
                act.send_state(ctx);
            }
        });
        self.advance_timer = Some(handle);
    }

    fn handle_client_message(&mut self, msg: ClientWsMessage, ctx: &mut ws::WebsocketContext<Self>) {
        match msg {
            ClientWsMessage::Move(direction) => self.apply_move(direction, ctx),
            ClientWsMessage::Key(key) => match Direction::from_key(&key) {
                Some(direction) => self.apply_move(direction, ctx),
                None => debug!("[MazeSession] Ignoring unmapped key '{}'", key),
            },
            ClientWsMessage::Restart => {
                self.cancel_advance(ctx);
                self.session.reset();
                self.send_state(ctx);
            }
            ClientWsMessage::NextLevel => {
                self.cancel_advance(ctx);
                self.session.skip_level();
                self.send_state(ctx);
            }
            ClientWsMessage::Ping => self.send_state(ctx),
        }
    }
}

impl Actor for MazeSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the session with the manager and sends the first level.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.manager.do_send(Connect {
            session_id: self.session_id,
            player: self.player.clone(),
        });
        self.send_state(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.manager.do_send(Disconnect {
            session_id: self.session_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for MazeSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientWsMessage>(&text) {
                Ok(msg) => self.handle_client_message(msg, ctx),
                Err(e) => {
                    debug!("[MazeSession] Invalid client message from {}: {}", self.session_id, e);
                    ctx.text(ws_error_message(
                        INVALID_COMMAND,
                        "Invalid client message",
                        Some(serde_json::json!({ "session_id": self.session_id })),
                    ));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                error!("[MazeSession] Protocol error on {}: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// Decode the `player` query parameter. Missing or blank names yield `None`.
pub fn parse_player_name(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(key, _)| *key == "player")
        .map(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
}

/// WebSocket endpoint for a maze run.
///
/// Accepts an optional `player` query parameter used for the best-time table.
/// If it is missing, a name is generated.
pub async fn ws_maze(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let player = match parse_player_name(req.query_string()) {
        Some(name) if name.chars().count() > MAX_PLAYER_NAME_LEN => {
            return Ok(http_error_response(
                INVALID_PLAYER_NAME,
                "Player name is too long",
                Some(serde_json::json!({ "max_len": MAX_PLAYER_NAME_LEN })),
                StatusCode::BAD_REQUEST,
            ));
        }
        Some(name) => name,
        None => format!("Runner_{}", &Uuid::new_v4().simple().to_string()[..6]),
    };

    info!("[MazeSession] New connection for '{}'", player);
    let session = MazeSession::new(data.settings.clone());

    ws::start(
        MazeSessionActor::new(player, session, data.manager.clone()),
        &req,
        stream,
    )
}
