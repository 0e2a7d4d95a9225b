use crate::constants::{
    BUDGET_STYLE_COST_THRESHOLD, BUDGET_STYLE_PENALTY, LARGE_GROUP_BONUS, LARGE_GROUP_SIZE,
    LUXURY_STYLE_COST_THRESHOLD, LUXURY_STYLE_PENALTY, SCORE_MAX,
};
use crate::models::{RouteCandidate, SeasonalFactors, TravelStyle};
use std::sync::Arc;

use super::learned::{RouteFeatures, ScorePredictor};
use super::scoring::ScoringContext;

/// One stage of the post-weighting adjustment pipeline. Stages run in a
/// fixed order and each receives the previous stage's output; clamping to
/// the score range happens once, after the whole pipeline.
pub trait ScoreAdjustment: Send + Sync {
    fn apply(&self, score: f64, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64;
}

/// Multiplies by the season's tourism factor, biasing rankings toward peak
/// travel seasons.
pub struct SeasonalAdjustment;

impl ScoreAdjustment for SeasonalAdjustment {
    fn apply(&self, score: f64, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64 {
        let factors = candidate
            .segments
            .first()
            .map(|s| s.seasonal_factors.factors(ctx.season))
            .unwrap_or(SeasonalFactors::NEUTRAL);

        score * factors.tourism
    }
}

/// Travel-style and group-size multipliers. Large groups get a flat bonus
/// on the assumption that bulk-friendly routes suit them better; that
/// heuristic is intentionally mild.
pub struct StyleAdjustment;

impl ScoreAdjustment for StyleAdjustment {
    fn apply(&self, score: f64, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64 {
        let mut factor = 1.0;

        match ctx.preferences.travel_style {
            TravelStyle::Budget => {
                if candidate.total_cost > BUDGET_STYLE_COST_THRESHOLD {
                    factor *= BUDGET_STYLE_PENALTY;
                }
            }
            TravelStyle::Luxury => {
                if candidate.total_cost < LUXURY_STYLE_COST_THRESHOLD {
                    factor *= LUXURY_STYLE_PENALTY;
                }
            }
            TravelStyle::Standard => {}
        }

        if ctx.preferences.group_size > LARGE_GROUP_SIZE {
            factor *= LARGE_GROUP_BONUS;
        }

        score * factor
    }
}

/// Blends the rule-based score with a learned prediction:
/// `rule * (1 - w) + prediction * w`, prediction clamped to the score
/// range. A failing predictor leaves the rule-based score unmodified; that
/// failure never reaches the caller.
pub struct LearnedBlend {
    predictor: Arc<dyn ScorePredictor>,
}

impl LearnedBlend {
    pub fn new(predictor: Arc<dyn ScorePredictor>) -> Self {
        LearnedBlend { predictor }
    }
}

impl ScoreAdjustment for LearnedBlend {
    fn apply(&self, score: f64, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64 {
        let features = RouteFeatures::from_candidate(candidate, ctx.preferences);

        match self.predictor.predict(&features) {
            Ok(prediction) => {
                let weight = self.predictor.blend_weight().clamp(0.0, 1.0);
                score * (1.0 - weight) + prediction.clamp(0.0, SCORE_MAX) * weight
            }
            Err(e) => {
                tracing::warn!(error = %e, "Score prediction failed, keeping rule-based score");
                score
            }
        }
    }
}
