#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityCatalogRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    // json_group_array aggregate of roster emails, in signup order.
    pub participants_json: Option<String>,
}
