use sqlx::SqlitePool;

use crate::models::ActivityCatalogRow;

const SQL_LIST_CATALOG: &str = r#"
SELECT
  a.name,
  a.description,
  a.schedule,
  a.max_participants,
  (
    SELECT json_group_array(email)
    FROM (
      SELECT p.email
      FROM activity_participants p
      WHERE p.activity_name = a.name
      ORDER BY p.rowid ASC
    )
  ) AS participants_json
FROM activities a
ORDER BY a.rowid ASC
"#;

pub async fn list_catalog(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityCatalogRow>> {
    sqlx::query_as::<_, ActivityCatalogRow>(SQL_LIST_CATALOG)
        .fetch_all(pool)
        .await
}

const SQL_ACTIVITY_EXISTS: &str = r#"
SELECT 1 FROM activities WHERE name = ?
"#;

pub async fn activity_exists(pool: &SqlitePool, name: &str) -> sqlx::Result<bool> {
    let row: Option<(i64,)> = sqlx::query_as(SQL_ACTIVITY_EXISTS)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
