use crate::catalog::LocationCatalog;
use crate::config::EngineConfig;
use crate::constants::DEFAULT_SCENIC_RATING;
use crate::models::{
    Attraction, Location, RoadType, RouteCandidate, RouteSegment, RouteType, SeasonalFactorTable,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Produces the candidate set for an origin/destination pair: the direct
/// route plus a bounded number of single-waypoint variants. Deterministic
/// for a fixed catalog and inputs.
pub struct CandidateGenerator {
    config: EngineConfig,
}

impl CandidateGenerator {
    pub fn new(config: EngineConfig) -> Self {
        CandidateGenerator { config }
    }

    /// Generate all candidates. Unresolvable origin or destination yields an
    /// empty set; the caller reads that as "no route found", not an error.
    pub fn generate(
        &self,
        catalog: &LocationCatalog,
        origin: &str,
        destination: &str,
        avoid: &HashSet<String>,
    ) -> Vec<RouteCandidate> {
        let (origin, destination) = match (catalog.resolve(origin), catalog.resolve(destination)) {
            (Some(o), Some(d)) => (o, d),
            _ => {
                tracing::debug!(origin, destination, "Origin or destination not in catalog");
                return Vec::new();
            }
        };

        let direct_distance = origin.coordinates.distance_to(&destination.coordinates);
        let direct = self.direct_candidate(origin, destination);

        // Degenerate origin == destination: the trivial direct route only,
        // and no detour ratios to divide by
        if direct_distance == 0.0 {
            return vec![direct];
        }

        let avoid: HashSet<String> = avoid.iter().map(|n| n.trim().to_lowercase()).collect();

        let mut candidates = vec![direct];
        for waypoint in self.eligible_waypoints(catalog, origin, destination, direct_distance, &avoid)
        {
            candidates.push(self.waypoint_candidate(origin, waypoint, destination));
        }

        tracing::debug!(
            count = candidates.len(),
            origin = %origin.name,
            destination = %destination.name,
            "Generated route candidates"
        );
        candidates
    }

    /// Waypoints worth routing through: both partial legs must be shorter
    /// than the direct distance and the combined detour must stay under the
    /// configured ratio. Sorted by detour ratio (name as tie-break, keeping
    /// the ordering total) and truncated to the configured count.
    fn eligible_waypoints<'a>(
        &self,
        catalog: &'a LocationCatalog,
        origin: &Location,
        destination: &Location,
        direct_distance: f64,
        avoid: &HashSet<String>,
    ) -> Vec<&'a Location> {
        let mut accepted: Vec<(f64, &Location)> = catalog
            .iter()
            .filter(|candidate| candidate.id != origin.id && candidate.id != destination.id)
            .filter(|candidate| !avoid.contains(&candidate.name.trim().to_lowercase()))
            .filter_map(|candidate| {
                let from_origin = origin.coordinates.distance_to(&candidate.coordinates);
                let to_destination = candidate.coordinates.distance_to(&destination.coordinates);

                if from_origin >= direct_distance || to_destination >= direct_distance {
                    return None;
                }

                let detour_ratio = (from_origin + to_destination) / direct_distance;
                if detour_ratio < self.config.max_detour_ratio {
                    Some((detour_ratio, candidate))
                } else {
                    None
                }
            })
            .collect();

        accepted.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.name.cmp(&b.1.name))
        });
        accepted.truncate(self.config.max_waypoints);

        accepted.into_iter().map(|(_, location)| location).collect()
    }

    fn direct_candidate(&self, origin: &Location, destination: &Location) -> RouteCandidate {
        let segment = self.build_segment(origin, destination, 0.0, 0.0);
        let attractions = dedup_attractions(&[origin, destination]);

        RouteCandidate::from_segments(RouteType::Direct, vec![segment], attractions, None, 0)
    }

    fn waypoint_candidate(
        &self,
        origin: &Location,
        waypoint: &Location,
        destination: &Location,
    ) -> RouteCandidate {
        // Sightseeing overhead at the waypoint, folded into the arriving
        // segment so candidate aggregates stay exact segment sums
        let visit_hours: f64 = waypoint
            .attractions
            .iter()
            .map(|a| a.visit_hours.unwrap_or(self.config.attraction_visit_hours))
            .sum();
        let visit_fees: f64 = waypoint
            .attractions
            .iter()
            .map(|a| a.entry_fee.unwrap_or(self.config.attraction_visit_fee))
            .sum();

        let inbound = self.build_segment(origin, waypoint, visit_hours, visit_fees);
        let outbound = self.build_segment(waypoint, destination, 0.0, 0.0);
        let attractions = dedup_attractions(&[origin, waypoint, destination]);

        RouteCandidate::from_segments(
            RouteType::WithWaypoint,
            vec![inbound, outbound],
            attractions,
            Some(waypoint.name.clone()),
            waypoint.population.unwrap_or(0),
        )
    }

    /// Derive a segment from a location pair. Scenic and cultural ratings
    /// come from the destination endpoint; safety follows the road class.
    fn build_segment(
        &self,
        from: &Location,
        to: &Location,
        extra_hours: f64,
        extra_cost: f64,
    ) -> RouteSegment {
        let distance_km = from.coordinates.distance_to(&to.coordinates);
        let road_type = RoadType::from_distance(distance_km);

        RouteSegment {
            origin_id: from.id,
            destination_id: to.id,
            distance_km,
            duration_hours: distance_km / self.config.average_speed_kmh + extra_hours,
            cost: distance_km * self.config.cost_per_km + extra_cost,
            scenic_rating: to.mean_attraction_rating().unwrap_or(DEFAULT_SCENIC_RATING),
            cultural_rating: to.cultural_significance(),
            safety_rating: road_type.safety_rating(),
            road_type,
            seasonal_factors: SeasonalFactorTable::default(),
        }
    }
}

/// Union of the given locations' attractions, deduplicated by id while
/// preserving encounter order.
fn dedup_attractions(locations: &[&Location]) -> Vec<Attraction> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut attractions = Vec::new();

    for location in locations {
        for attraction in &location.attractions {
            if seen.insert(attraction.id) {
                attractions.push(attraction.clone());
            }
        }
    }

    attractions
}
