use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::signup_service::{self, SignupError};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::signup(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(roster_error_response)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::unregister(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(roster_error_response)
}

fn roster_error_response(err: SignupError) -> (StatusCode, Json<Value>) {
    match err {
        SignupError::ActivityNotFound => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Activity not found" })),
        ),
        SignupError::AlreadySignedUp | SignupError::NotSignedUp => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": err.to_string() })),
        ),
        SignupError::Db(e) => {
            warn!("Roster command failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "internal error" })),
            )
        }
    }
}
