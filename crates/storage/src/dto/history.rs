use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{RiskProfile, Routine, Scan};

/// A stored analysis as returned by the history endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub bsi: i64,
    pub risks: RiskProfile,
    pub routine: Routine,
}

impl From<Scan> for HistoryRecordResponse {
    fn from(scan: Scan) -> Self {
        Self {
            id: scan.id,
            created_at: scan.created_at,
            bsi: scan.bsi,
            risks: scan.risks.0,
            routine: scan.routine.0,
        }
    }
}
