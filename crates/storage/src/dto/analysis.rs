use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{RiskProfile, Routine};
use crate::services::scoring::{InputVector, MetricDelta, ScoreResult};

/// Text fields of the `/api/analyze` multipart form.
///
/// The optional `image` part is not represented here; it is handed to the
/// upload sink untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeForm {
    /// Hours of sleep, clamped to [0, 24]
    pub sleep: Option<String>,
    /// Stress level, clamped to [0, 10]
    pub stress: Option<String>,
    /// Hydration level, clamped to [0, 10]
    pub hydration: Option<String>,
    pub skin_goal: Option<String>,
    pub hair_goal: Option<String>,
    pub environment: Option<String>,
}

impl AnalyzeForm {
    /// Store a named text field; unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "sleep" => &mut self.sleep,
            "stress" => &mut self.stress,
            "hydration" => &mut self.hydration,
            "skinGoal" => &mut self.skin_goal,
            "hairGoal" => &mut self.hair_goal,
            "environment" => &mut self.environment,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Parse the three metrics, reporting every bad field at once.
    pub fn to_input(&self) -> Result<InputVector, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let sleep = parse_metric("sleep", self.sleep.as_deref(), &mut errors);
        let stress = parse_metric("stress", self.stress.as_deref(), &mut errors);
        let hydration = parse_metric("hydration", self.hydration.as_deref(), &mut errors);

        match (sleep, stress, hydration) {
            (Some(sleep), Some(stress), Some(hydration)) => {
                Ok(InputVector::new(sleep, stress, hydration))
            }
            _ => Err(errors),
        }
    }
}

fn parse_metric(
    field: &'static str,
    raw: Option<&str>,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let Some(raw) = raw.map(str::trim) else {
        errors.add(field, metric_error("required", "is required"));
        return None;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(_) => {
            errors.add(field, metric_error("finite", "must be a finite number"));
            None
        }
        Err(_) => {
            errors.add(field, metric_error("numeric", "must be a number"));
            None
        }
    }
}

fn metric_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct MetricsInput {
    pub sleep: f64,
    pub stress: f64,
    pub hydration: f64,
}

impl From<MetricsInput> for InputVector {
    fn from(metrics: MetricsInput) -> Self {
        InputVector::new(metrics.sleep, metrics.stress, metrics.hydration)
    }
}

/// Changes applied on top of the base metrics; absent fields mean no change.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ScenarioDelta {
    #[validate(range(min = -24.0, max = 24.0, message = "Sleep delta must be between -24 and 24"))]
    pub sleep: Option<f64>,

    #[validate(range(min = -10.0, max = 10.0, message = "Stress delta must be between -10 and 10"))]
    pub stress: Option<f64>,

    #[validate(range(
        min = -10.0,
        max = 10.0,
        message = "Hydration delta must be between -10 and 10"
    ))]
    pub hydration: Option<f64>,
}

impl From<ScenarioDelta> for MetricDelta {
    fn from(delta: ScenarioDelta) -> Self {
        MetricDelta {
            sleep: delta.sleep.unwrap_or_default(),
            stress: delta.stress.unwrap_or_default(),
            hydration: delta.hydration.unwrap_or_default(),
        }
    }
}

/// Request payload for a hypothetical rescoring
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct WhatIfRequest {
    #[validate(nested)]
    pub base: MetricsInput,

    #[validate(nested)]
    #[serde(default)]
    pub scenario: ScenarioDelta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub bsi: i64,
    pub risks: RiskProfile,
}

impl From<ScoreResult> for AnalysisResult {
    fn from(score: ScoreResult) -> Self {
        Self {
            bsi: score.bsi,
            risks: score.risks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub routine: Routine,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfResponse {
    pub base: AnalysisResult,
    pub scenario: AnalysisResult,
    /// `scenario.bsi - base.bsi`
    pub bsi_delta: i64,
}
