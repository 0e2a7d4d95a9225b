use crate::constants::{LEARNED_BLEND_WEIGHT, SCORE_MIDPOINT};
use crate::error::Result;
use crate::models::{RouteCandidate, UserPreferences};

use super::scoring;

/// Feature vector handed to a learned scorer. Mirrors the features the
/// model was trained on: route aggregates, the rule-based scenic/cultural
/// sub-scores, and placeholder slots for signals not available at
/// recommendation time.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFeatures {
    pub distance_km: f64,
    pub duration_hours: f64,
    pub cost: f64,
    pub scenic_score: f64,
    pub cultural_score: f64,
    /// Placeholder; the live seasonal adjustment is applied separately.
    pub seasonal_factor: f64,
    /// Placeholder; accessibility data is not collected yet.
    pub accessibility_score: f64,
}

impl RouteFeatures {
    pub fn from_candidate(candidate: &RouteCandidate, preferences: &UserPreferences) -> Self {
        RouteFeatures {
            distance_km: candidate.total_distance_km,
            duration_hours: candidate.total_duration_hours,
            cost: candidate.total_cost,
            scenic_score: scoring::scenic_score(candidate),
            cultural_score: scoring::cultural_score(candidate, preferences),
            seasonal_factor: 1.0,
            accessibility_score: 1.0,
        }
    }
}

/// Capability interface for an externally trained route scorer.
///
/// Implementations wrap whatever regression model is available; the engine
/// only depends on this contract. Predictions are clamped by the blend
/// stage, so implementations may return raw model output.
pub trait ScorePredictor: Send + Sync {
    fn predict(&self, features: &RouteFeatures) -> Result<f64>;

    /// Weight given to the prediction when blending with the rule-based
    /// composite: `rule * (1 - w) + prediction * w`.
    fn blend_weight(&self) -> f64 {
        LEARNED_BLEND_WEIGHT
    }
}

/// Null-object predictor used when no trained model is available. Predicts
/// the scale midpoint with zero blend weight, so the blend stage runs
/// unconditionally while leaving the rule-based score unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralPredictor;

impl ScorePredictor for NeutralPredictor {
    fn predict(&self, _features: &RouteFeatures) -> Result<f64> {
        Ok(SCORE_MIDPOINT)
    }

    fn blend_weight(&self) -> f64 {
        0.0
    }
}
