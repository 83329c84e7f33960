use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activities_repo;
use crate::models::ActivityCatalogRow;

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// The full catalog as served by `GET /activities`: activity name mapped to
/// its details and current roster.
pub async fn load_catalog(pool: &SqlitePool) -> sqlx::Result<BTreeMap<String, ActivityView>> {
    let rows = activities_repo::list_catalog(pool).await?;

    let mut catalog = BTreeMap::new();
    for row in rows {
        let view = build_view(&row);
        catalog.insert(row.name, view);
    }
    Ok(catalog)
}

fn build_view(row: &ActivityCatalogRow) -> ActivityView {
    ActivityView {
        description: row.description.clone(),
        schedule: row.schedule.clone(),
        max_participants: row.max_participants,
        participants: parse_string_array_json(row.participants_json.as_deref()),
    }
}

fn parse_string_array_json(json: Option<&str>) -> Vec<String> {
    let Some(raw) = json else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}
