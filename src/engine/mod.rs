mod adjustment;
mod candidates;
pub mod learned;
mod ranking;
mod scoring;

use crate::catalog::LocationCatalog;
use crate::config::EngineConfig;
use crate::constants::DEFAULT_NEAR_ROUTE_RADIUS_KM;
use crate::models::{
    Coordinates, NearbyAttraction, RecommendRequest, RouteCandidate, Season, UserPreferences,
};
use std::cmp::Ordering;
use std::sync::Arc;

use candidates::CandidateGenerator;
use scoring::CompositeScorer;

pub use adjustment::ScoreAdjustment;
pub use learned::{NeutralPredictor, RouteFeatures, ScorePredictor};
pub use scoring::ScoringContext;

/// The route recommendation engine: stateless, synchronous, and safe to
/// share across threads. All reference data comes in through the catalog
/// argument; per-user preference profiles live in a collaborator store.
pub struct RouteEngine {
    config: EngineConfig,
    generator: CandidateGenerator,
    scorer: CompositeScorer,
}

impl RouteEngine {
    /// Engine without a trained scorer; the rule-based composite is used
    /// as-is.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_predictor(config, Arc::new(NeutralPredictor))
    }

    /// Engine blending the rule-based composite with the given predictor.
    pub fn with_predictor(config: EngineConfig, predictor: Arc<dyn ScorePredictor>) -> Self {
        tracing::info!(
            max_waypoints = config.max_waypoints,
            max_detour_ratio = config.max_detour_ratio,
            "Route engine initialized"
        );

        RouteEngine {
            generator: CandidateGenerator::new(config.clone()),
            scorer: CompositeScorer::new(predictor),
            config,
        }
    }

    /// Recommend routes between two named locations, ranked best-first.
    ///
    /// An empty list signals "no route": unresolvable locations, or every
    /// candidate filtered out by the caller's constraints. This never
    /// fails; invalid requests are logged and yield an empty list.
    pub fn recommend(
        &self,
        catalog: &LocationCatalog,
        request: &RecommendRequest,
    ) -> Vec<RouteCandidate> {
        if let Err(e) = request.validate() {
            tracing::warn!(error = %e, "Rejecting invalid recommendation request");
            return Vec::new();
        }

        let ctx = ScoringContext {
            preferences: &request.preferences,
            season: self.season(),
        };

        let mut candidates = self.generator.generate(
            catalog,
            &request.origin,
            &request.destination,
            &request.avoid,
        );

        for candidate in &mut candidates {
            candidate.score = self.scorer.score(candidate, &ctx);
        }

        let max_results = request.max_results.unwrap_or(self.config.max_results);
        ranking::rank_candidates(candidates, request.budget, request.duration_days, max_results)
    }

    /// Score a single candidate against the given preferences.
    pub fn score(&self, candidate: &RouteCandidate, preferences: &UserPreferences) -> f64 {
        let ctx = ScoringContext {
            preferences,
            season: self.season(),
        };
        self.scorer.score(candidate, &ctx)
    }

    /// Attractions within `radius_km` of the candidate's corridor, closest
    /// first. Pass `None` for the default radius.
    pub fn attractions_near_route(
        &self,
        catalog: &LocationCatalog,
        candidate: &RouteCandidate,
        radius_km: Option<f64>,
    ) -> Vec<NearbyAttraction> {
        let radius_km = radius_km.unwrap_or(DEFAULT_NEAR_ROUTE_RADIUS_KM);

        let corridors: Vec<(Coordinates, Coordinates)> = candidate
            .segments
            .iter()
            .filter_map(|segment| {
                let from = catalog.get_by_id(&segment.origin_id)?;
                let to = catalog.get_by_id(&segment.destination_id)?;
                Some((from.coordinates, to.coordinates))
            })
            .collect();

        if corridors.is_empty() {
            return Vec::new();
        }

        let mut nearby: Vec<NearbyAttraction> = catalog
            .iter()
            .flat_map(|location| location.attractions.iter())
            .filter_map(|attraction| {
                let distance = corridors
                    .iter()
                    .map(|(from, to)| attraction.coordinates.distance_to_segment(from, to).0)
                    .fold(f64::INFINITY, f64::min);

                if distance <= radius_km {
                    Some(NearbyAttraction {
                        attraction: attraction.clone(),
                        distance_from_route_km: distance,
                    })
                } else {
                    None
                }
            })
            .collect();

        nearby.sort_by(|a, b| {
            a.distance_from_route_km
                .partial_cmp(&b.distance_from_route_km)
                .unwrap_or(Ordering::Equal)
        });
        nearby
    }

    fn season(&self) -> Season {
        self.config.season_override.unwrap_or_else(Season::current)
    }
}
