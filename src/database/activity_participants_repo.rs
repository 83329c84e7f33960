use sqlx::SqlitePool;

// The UNIQUE(activity_name, email) constraint does the duplicate check, so a
// signup is a single statement: rows_affected 0 means already on the roster.
const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT OR IGNORE INTO activity_participants (
  activity_name,
  email
) VALUES (?, ?)
"#;

pub async fn insert_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?
  AND email = ?
"#;

pub async fn delete_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
