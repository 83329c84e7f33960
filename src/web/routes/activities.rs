use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::activities_service::{self, ActivityView};

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<String, ActivityView>>, (StatusCode, Json<Value>)> {
    activities_service::load_catalog(&pool)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Catalog load failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "internal error" })),
            )
        })
}
