use chrono::Utc;
use sqlx::SqlitePool;
use storage::{
    dto::analysis::{AnalysisResult, AnalyzeResponse, WhatIfRequest, WhatIfResponse},
    error::Result,
    models::Routine,
    repository::scan::ScanRepository,
    services::scoring::{self, InputVector, MetricDelta},
};

/// Score the input, append it to the history and build the response.
pub async fn analyze(pool: &SqlitePool, input: &InputVector) -> Result<AnalyzeResponse> {
    let score = scoring::compute_score(input);
    let routine = Routine::standard();

    let repo = ScanRepository::new(pool);
    let scan = repo.append(&score, &routine, Utc::now()).await?;
    tracing::info!(id = scan.id, bsi = scan.bsi, "Recorded analysis");

    Ok(AnalyzeResponse {
        analysis: AnalysisResult::from(score),
        routine,
    })
}

/// Score a base state and the same state with the scenario applied.
pub fn what_if(request: &WhatIfRequest) -> WhatIfResponse {
    let base_input = InputVector::from(request.base);
    let scenario_input = base_input.project(&MetricDelta::from(request.scenario));

    let base = AnalysisResult::from(scoring::compute_score(&base_input));
    let scenario = AnalysisResult::from(scoring::compute_score(&scenario_input));

    WhatIfResponse {
        base,
        scenario,
        bsi_delta: scenario.bsi - base.bsi,
    }
}
