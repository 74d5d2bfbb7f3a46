use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;

/// One persisted analysis, as stored in the `scans` table.
///
/// Rows are write-once; `risks` and `routine` are kept as JSON text.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Scan {
    pub id: i64,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub bsi: i64,
    pub risks: Json<RiskProfile>,
    pub routine: Json<Routine>,
}

/// Risk values derived from a BSI by fixed offsets.
///
/// Values are deliberately left unclamped: a BSI above 65 yields a
/// negative irritation risk, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub breakout_risk: i64,
    pub barrier_risk: i64,
    pub irritation_risk: i64,
}

/// Suggested product-use steps returned with every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Routine {
    pub morning: Vec<String>,
}

const MORNING_STEPS: [&str; 4] = ["Cleanser", "Serum", "Moisturizer", "SPF"];

impl Routine {
    /// The fixed, non-personalized routine.
    pub fn standard() -> Self {
        Self {
            morning: MORNING_STEPS.iter().map(|step| step.to_string()).collect(),
        }
    }
}
