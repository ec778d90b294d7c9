//! HTTP handlers for the in-memory best-time table.

use actix_web::{web, error, Error, HttpResponse, http::StatusCode};

use crate::server::maze_session::messages::{GetBestTimes, GetLevelBestTimes};
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, LEVEL_NOT_FOUND};

/// `GET /best-times`: every level with recorded times.
pub async fn all_best_times(data: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let times = data
        .manager
        .send(GetBestTimes)
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(times))
}

/// `GET /best-times/{level}`: the table for one level.
pub async fn level_best_times(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let level = path.into_inner();
    let result = data
        .manager
        .send(GetLevelBestTimes { level })
        .await
        .map_err(error::ErrorInternalServerError)?;

    Ok(match result {
        Ok(times) => HttpResponse::Ok().json(times),
        Err(message) => http_error_response(
            LEVEL_NOT_FOUND,
            &message,
            Some(serde_json::json!({ "level": level })),
            StatusCode::NOT_FOUND,
        ),
    })
}
