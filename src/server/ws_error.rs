/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::Value;

use crate::server::maze_session::messages::ServerWsMessage;

/// A client message could not be parsed.
pub const INVALID_COMMAND: &str = "INVALID_COMMAND";
/// The `player` query parameter was rejected.
pub const INVALID_PLAYER_NAME: &str = "INVALID_PLAYER_NAME";
/// An outgoing message could not be serialized.
pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";
/// No best times exist for the requested level.
pub const LEVEL_NOT_FOUND: &str = "LEVEL_NOT_FOUND";
/// An actor did not answer.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message (in English).
/// - `context`: Optional context (e.g. session_id, level).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    serde_json::to_string(&ServerWsMessage::error(code, message, context)).unwrap_or_else(|_| {
        format!(r#"{{"action":"Error","data":{{"code":"{}","message":"","context":null}}}}"#, code)
    })
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context value.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<Value>,
    status: StatusCode,
) -> HttpResponse {
    let body = serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "context": context,
        }
    });
    HttpResponse::build(status).json(body)
}
