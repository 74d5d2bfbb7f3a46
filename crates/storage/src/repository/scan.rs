use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::types::Json;

use crate::error::{Result, StorageError};
use crate::models::{Routine, Scan};
use crate::services::scoring::ScoreResult;

/// Append-only access to the `scans` history table.
pub struct ScanRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScanRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a computed score and return the stored record.
    ///
    /// Ids come from SQLite's `AUTOINCREMENT` inside a single statement, so
    /// concurrent appends never share an id and ids never go backwards.
    pub async fn append(
        &self,
        score: &ScoreResult,
        routine: &Routine,
        created_at: DateTime<Utc>,
    ) -> Result<Scan> {
        let scan = sqlx::query_as::<_, Scan>(
            r#"
            INSERT INTO scans (createdAt, bsi, risks, routine)
            VALUES ($1, $2, $3, $4)
            RETURNING id, createdAt, bsi, risks, routine
            "#,
        )
        .bind(created_at)
        .bind(score.bsi)
        .bind(Json(&score.risks))
        .bind(Json(routine))
        .fetch_one(self.pool)
        .await?;

        Ok(scan)
    }

    /// All records, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Scan>> {
        let scans = sqlx::query_as::<_, Scan>(
            r#"
            SELECT id, createdAt, bsi, risks, routine
            FROM scans
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(scans)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Scan> {
        let scan = sqlx::query_as::<_, Scan>(
            r#"
            SELECT id, createdAt, bsi, risks, routine
            FROM scans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(scan)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scans")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
