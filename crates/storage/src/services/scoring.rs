use crate::models::RiskProfile;

pub const MAX_SLEEP_HOURS: f64 = 24.0;
pub const MAX_LEVEL: f64 = 10.0;

pub const MIN_BSI: i64 = 0;
pub const MAX_BSI: i64 = 100;

const BASE_SCORE: f64 = 50.0;
const SLEEP_WEIGHT: f64 = 2.0;
const STRESS_WEIGHT: f64 = 3.0;
const HYDRATION_WEIGHT: f64 = 2.0;

const BREAKOUT_OFFSET: i64 = 80;
const BARRIER_OFFSET: i64 = 70;
const IRRITATION_OFFSET: i64 = 65;

/// Lifestyle metrics for one analysis, clamped into their domains.
///
/// Sleep is hours in `[0, 24]`; stress and hydration are levels in `[0, 10]`.
/// Non-finite values must be rejected before construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVector {
    sleep_hours: f64,
    stress_level: f64,
    hydration_level: f64,
}

impl InputVector {
    pub fn new(sleep_hours: f64, stress_level: f64, hydration_level: f64) -> Self {
        Self {
            sleep_hours: sleep_hours.clamp(0.0, MAX_SLEEP_HOURS),
            stress_level: stress_level.clamp(0.0, MAX_LEVEL),
            hydration_level: hydration_level.clamp(0.0, MAX_LEVEL),
        }
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn stress_level(&self) -> f64 {
        self.stress_level
    }

    pub fn hydration_level(&self) -> f64 {
        self.hydration_level
    }

    /// Apply per-metric deltas and clamp the result again.
    pub fn project(&self, delta: &MetricDelta) -> Self {
        Self::new(
            self.sleep_hours + delta.sleep,
            self.stress_level + delta.stress,
            self.hydration_level + delta.hydration,
        )
    }
}

/// Hypothetical change to each metric; zero means unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricDelta {
    pub sleep: f64,
    pub stress: f64,
    pub hydration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub bsi: i64,
    pub risks: RiskProfile,
}

/// BSI = 50 + 2·sleep − 3·stress + 2·hydration, saturated to `[0, 100]`
/// and rounded to the nearest integer.
pub fn compute_bsi(input: &InputVector) -> i64 {
    let raw = BASE_SCORE + SLEEP_WEIGHT * input.sleep_hours - STRESS_WEIGHT * input.stress_level
        + HYDRATION_WEIGHT * input.hydration_level;

    raw.clamp(MIN_BSI as f64, MAX_BSI as f64).round() as i64
}

pub fn compute_risks(bsi: i64) -> RiskProfile {
    RiskProfile {
        breakout_risk: BREAKOUT_OFFSET - bsi,
        barrier_risk: BARRIER_OFFSET - bsi,
        irritation_risk: IRRITATION_OFFSET - bsi,
    }
}

pub fn compute_score(input: &InputVector) -> ScoreResult {
    let bsi = compute_bsi(input);
    ScoreResult {
        bsi,
        risks: compute_risks(bsi),
    }
}
