use crate::models::RouteCandidate;
use std::cmp::Ordering;

/// Sort candidates by score descending, apply the caller's hard
/// constraints, and truncate to the requested count. An empty result means
/// no candidate satisfied the constraints, which callers must distinguish
/// from "locations not found" by checking resolution separately.
pub(crate) fn rank_candidates(
    mut candidates: Vec<RouteCandidate>,
    budget: Option<f64>,
    duration_days: Option<u32>,
    max_results: usize,
) -> Vec<RouteCandidate> {
    // Distance and intermediate-name tie-breaks keep equal-scored
    // candidates in a reproducible order
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.total_distance_km
                    .partial_cmp(&b.total_distance_km)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.intermediate_location.cmp(&b.intermediate_location))
    });

    if let Some(budget) = budget {
        candidates.retain(|c| c.total_cost <= budget);
    }

    if let Some(days) = duration_days {
        let max_hours = days as f64 * 24.0;
        candidates.retain(|c| c.total_duration_hours <= max_hours);
    }

    candidates.truncate(max_results);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteType;

    fn candidate(score: f64, cost: f64, duration_hours: f64) -> RouteCandidate {
        let mut c = RouteCandidate::from_segments(RouteType::Direct, vec![], vec![], None, 0);
        c.score = score;
        c.total_cost = cost;
        c.total_duration_hours = duration_hours;
        c
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let ranked = rank_candidates(
            vec![
                candidate(2.1, 100.0, 5.0),
                candidate(4.8, 100.0, 5.0),
                candidate(3.3, 100.0, 5.0),
            ],
            None,
            None,
            5,
        );

        let scores: Vec<f64> = ranked.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![4.8, 3.3, 2.1]);
    }

    #[test]
    fn test_budget_filter_drops_expensive_candidates() {
        let ranked = rank_candidates(
            vec![candidate(4.0, 150.0, 5.0), candidate(3.0, 300.0, 5.0)],
            Some(100.0),
            None,
            5,
        );
        assert!(ranked.is_empty());

        let ranked = rank_candidates(
            vec![candidate(4.0, 150.0, 5.0), candidate(3.0, 300.0, 5.0)],
            Some(200.0),
            None,
            5,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_cost, 150.0);
    }

    #[test]
    fn test_duration_filter_uses_day_ceiling() {
        let ranked = rank_candidates(
            vec![candidate(4.0, 100.0, 10.0), candidate(3.0, 100.0, 30.0)],
            None,
            Some(1),
            5,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_duration_hours, 10.0);
    }

    #[test]
    fn test_truncated_to_max_results() {
        let candidates: Vec<RouteCandidate> = (0..10)
            .map(|i| candidate(i as f64 / 2.0, 100.0, 5.0))
            .collect();

        let ranked = rank_candidates(candidates, None, None, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].score, 4.5);
    }

    #[test]
    fn test_equal_scores_tie_break_on_distance() {
        let mut shorter = candidate(3.0, 100.0, 5.0);
        shorter.total_distance_km = 200.0;
        let mut longer = candidate(3.0, 100.0, 5.0);
        longer.total_distance_km = 450.0;

        let ranked = rank_candidates(vec![longer, shorter], None, None, 5);
        assert_eq!(ranked[0].total_distance_km, 200.0);
    }
}
