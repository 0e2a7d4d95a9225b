use crate::constants::{
    CULTURAL_INTEREST_BONUS, DURATION_SCORE_HOURS_DIVISOR, QUIET_POPULATION_DIVISOR, SCORE_MAX,
    SPEED_SCORE_KM_DIVISOR,
};
use crate::models::{BudgetTier, Criterion, RouteCandidate, Season, UserPreferences};
use std::sync::Arc;

use super::adjustment::{LearnedBlend, ScoreAdjustment, SeasonalAdjustment, StyleAdjustment};
use super::learned::ScorePredictor;

/// Context passed through scoring and adjustment stages.
pub struct ScoringContext<'a> {
    pub preferences: &'a UserPreferences,
    pub season: Season,
}

/// Maps a candidate and preferences to a composite score in [0, 5]:
/// a normalized weighted sum over the unified criterion table, followed by
/// an ordered pipeline of adjustments (seasonal, travel style, learned
/// blend). Clamping happens only at the very end.
pub struct CompositeScorer {
    adjustments: Vec<Box<dyn ScoreAdjustment>>,
}

impl CompositeScorer {
    pub fn new(predictor: Arc<dyn ScorePredictor>) -> Self {
        let adjustments: Vec<Box<dyn ScoreAdjustment>> = vec![
            Box::new(SeasonalAdjustment),
            Box::new(StyleAdjustment),
            Box::new(LearnedBlend::new(predictor)),
        ];

        CompositeScorer { adjustments }
    }

    pub fn score(&self, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64 {
        let weighted = self.weighted_sum(candidate, ctx);

        let adjusted = self
            .adjustments
            .iter()
            .fold(weighted, |score, adjustment| {
                adjustment.apply(score, candidate, ctx)
            });

        adjusted.clamp(0.0, SCORE_MAX)
    }

    fn weighted_sum(&self, candidate: &RouteCandidate, ctx: &ScoringContext) -> f64 {
        ctx.preferences
            .weights
            .merged_normalized()
            .iter()
            .map(|(criterion, weight)| weight * sub_score(*criterion, candidate, ctx.preferences))
            .sum()
    }
}

fn sub_score(criterion: Criterion, candidate: &RouteCandidate, preferences: &UserPreferences) -> f64 {
    match criterion {
        Criterion::Speed => speed_score(candidate.total_distance_km),
        Criterion::Duration => duration_score(candidate.total_duration_hours),
        Criterion::Cost => cost_score(candidate.total_cost, preferences.budget_tier),
        Criterion::Cultural => cultural_score(candidate, preferences),
        Criterion::Scenic => scenic_score(candidate),
        Criterion::Quiet => quiet_score(candidate.waypoint_population),
    }
}

/// Linear distance penalty: full marks at 0 km, zero at 500 km and beyond.
pub(crate) fn speed_score(distance_km: f64) -> f64 {
    (SCORE_MAX - distance_km / SPEED_SCORE_KM_DIVISOR).max(0.0)
}

/// Linear duration penalty: full marks at 0 h, zero at 10 h and beyond.
pub(crate) fn duration_score(duration_hours: f64) -> f64 {
    (SCORE_MAX - duration_hours / DURATION_SCORE_HOURS_DIVISOR).max(0.0)
}

/// Bucket the cost against the budget tier's ceiling.
pub(crate) fn cost_score(cost: f64, tier: BudgetTier) -> f64 {
    let ceiling = tier.ceiling();

    if cost <= ceiling * 0.5 {
        5.0
    } else if cost <= ceiling * 0.8 {
        4.0
    } else if cost <= ceiling {
        3.0
    } else if cost <= ceiling * 1.5 {
        2.0
    } else {
        1.0
    }
}

/// Mean per-segment cultural rating, with a flat bonus when the caller
/// declared cultural interests. Capped at 5.
pub(crate) fn cultural_score(candidate: &RouteCandidate, preferences: &UserPreferences) -> f64 {
    if candidate.segments.is_empty() {
        return 0.0;
    }

    let total: f64 = candidate.segments.iter().map(|s| s.cultural_rating).sum();
    let mut score = total / candidate.segments.len() as f64;

    if !preferences.cultural_interests.is_empty() {
        score += CULTURAL_INTEREST_BONUS;
    }

    score.min(SCORE_MAX)
}

/// Mean per-segment scenic rating, capped at 5.
pub(crate) fn scenic_score(candidate: &RouteCandidate) -> f64 {
    if candidate.segments.is_empty() {
        return 0.0;
    }

    let total: f64 = candidate.segments.iter().map(|s| s.scenic_rating).sum();
    (total / candidate.segments.len() as f64).min(SCORE_MAX)
}

/// Population-based calm: 5 for empty countryside, asymptotically 0 for
/// metropolis waypoints.
pub(crate) fn quiet_score(population: u64) -> f64 {
    SCORE_MAX / (1.0 + population as f64 / QUIET_POPULATION_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::learned::NeutralPredictor;
    use crate::models::{
        RoadType, RouteSegment, RouteType, SeasonalFactorTable, WeightVector,
    };
    use uuid::Uuid;

    fn segment(distance_km: f64, cost: f64, scenic: f64, cultural: f64) -> RouteSegment {
        RouteSegment {
            origin_id: Uuid::new_v4(),
            destination_id: Uuid::new_v4(),
            distance_km,
            duration_hours: distance_km / 80.0,
            cost,
            scenic_rating: scenic,
            cultural_rating: cultural,
            safety_rating: 4.0,
            road_type: RoadType::from_distance(distance_km),
            seasonal_factors: SeasonalFactorTable::default(),
        }
    }

    fn candidate(distance_km: f64, cost: f64) -> RouteCandidate {
        RouteCandidate::from_segments(
            RouteType::Direct,
            vec![segment(distance_km, cost, 3.0, 2.0)],
            vec![],
            None,
            0,
        )
    }

    #[test]
    fn test_speed_score_boundaries() {
        assert_eq!(speed_score(0.0), 5.0);
        assert_eq!(speed_score(250.0), 2.5);
        assert_eq!(speed_score(500.0), 0.0);
        assert_eq!(speed_score(900.0), 0.0);
    }

    #[test]
    fn test_duration_score_boundaries() {
        assert_eq!(duration_score(0.0), 5.0);
        assert_eq!(duration_score(5.0), 2.5);
        assert_eq!(duration_score(10.0), 0.0);
        assert_eq!(duration_score(30.0), 0.0);
    }

    #[test]
    fn test_cost_score_buckets() {
        // Medium tier, ceiling 500_000
        let tier = BudgetTier::Medium;
        assert_eq!(cost_score(100_000.0, tier), 5.0); // <= 50%
        assert_eq!(cost_score(350_000.0, tier), 4.0); // <= 80%
        assert_eq!(cost_score(500_000.0, tier), 3.0); // <= 100%
        assert_eq!(cost_score(700_000.0, tier), 2.0); // <= 150%
        assert_eq!(cost_score(2_000_000.0, tier), 1.0);
    }

    #[test]
    fn test_cultural_bonus_applies_once_and_caps() {
        let candidate = RouteCandidate::from_segments(
            RouteType::WithWaypoint,
            vec![
                segment(100.0, 50.0, 3.0, 4.8),
                segment(100.0, 50.0, 3.0, 4.8),
            ],
            vec![],
            Some("Kashan".to_string()),
            0,
        );

        let mut prefs = UserPreferences::default();
        assert!((cultural_score(&candidate, &prefs) - 4.8).abs() < 1e-9);

        prefs.cultural_interests = vec!["architecture".to_string()];
        // 4.8 + 0.5 capped at 5.0
        assert_eq!(cultural_score(&candidate, &prefs), 5.0);
    }

    #[test]
    fn test_quiet_score_scales_with_population() {
        assert_eq!(quiet_score(0), 5.0);
        assert!((quiet_score(1_000_000) - 2.5).abs() < 1e-9);
        assert!(quiet_score(9_000_000) < 1.0);
    }

    #[test]
    fn test_composite_score_in_range() {
        let scorer = CompositeScorer::new(Arc::new(NeutralPredictor));
        let prefs = UserPreferences::default();
        let ctx = ScoringContext {
            preferences: &prefs,
            season: Season::Spring,
        };

        for distance in [0.0, 50.0, 400.0, 2_000.0] {
            let score = scorer.score(&candidate(distance, distance * 0.5), &ctx);
            assert!((0.0..=5.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_score_decreases_with_distance() {
        let scorer = CompositeScorer::new(Arc::new(NeutralPredictor));
        let prefs = UserPreferences {
            weights: WeightVector::new().with(Criterion::Speed, 1.0),
            ..Default::default()
        };
        let ctx = ScoringContext {
            preferences: &prefs,
            season: Season::Summer,
        };

        let near = scorer.score(&candidate(100.0, 50.0), &ctx);
        let far = scorer.score(&candidate(400.0, 200.0), &ctx);
        assert!(near > far, "expected {} > {}", near, far);
    }

    #[test]
    fn test_seasonal_adjustment_shifts_score() {
        let scorer = CompositeScorer::new(Arc::new(NeutralPredictor));
        let prefs = UserPreferences::default();
        let candidate = candidate(150.0, 75.0);

        let spring = scorer.score(
            &candidate,
            &ScoringContext {
                preferences: &prefs,
                season: Season::Spring,
            },
        );
        let winter = scorer.score(
            &candidate,
            &ScoringContext {
                preferences: &prefs,
                season: Season::Winter,
            },
        );

        // Spring tourism factor 1.3 vs winter 0.8
        assert!(spring > winter);
    }
}
