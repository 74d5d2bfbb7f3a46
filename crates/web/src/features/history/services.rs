use sqlx::SqlitePool;
use storage::{error::Result, models::Scan, repository::scan::ScanRepository};

/// List every recorded analysis, most recent first
pub async fn list_history(pool: &SqlitePool) -> Result<Vec<Scan>> {
    let repo = ScanRepository::new(pool);
    repo.list_all().await
}

/// Get a single recorded analysis
pub async fn get_history_record(pool: &SqlitePool, id: i64) -> Result<Scan> {
    let repo = ScanRepository::new(pool);
    repo.get_by_id(id).await
}
