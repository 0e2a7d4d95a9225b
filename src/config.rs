use crate::constants::*;
use crate::error::{EngineError, Result};
use crate::models::Season;
use std::env;

/// Tuning knobs for the recommendation engine. All values have sensible
/// defaults and can be overridden through `ROUTE_*` environment variables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Average travel speed (km/h) used to derive segment durations.
    pub average_speed_kmh: f64,

    /// Monetary cost per travelled kilometer.
    pub cost_per_km: f64,

    /// Sightseeing time (hours) per attraction at a waypoint, used when an
    /// attraction has no visit duration of its own.
    pub attraction_visit_hours: f64,

    /// Entry fee per attraction at a waypoint, used when an attraction has
    /// no fee of its own.
    pub attraction_visit_fee: f64,

    /// Maximum accepted detour ratio for waypoint candidates. Policy
    /// heuristic, not an optimality guarantee.
    pub max_detour_ratio: f64,

    /// Maximum number of waypoint candidates materialized per request.
    pub max_waypoints: usize,

    /// Default maximum number of ranked candidates returned.
    pub max_results: usize,

    /// Fixes the season used for scoring instead of deriving it from the
    /// calendar. Keeps ranking reproducible in tests and replays.
    pub season_override: Option<Season>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            cost_per_km: DEFAULT_COST_PER_KM,
            attraction_visit_hours: DEFAULT_ATTRACTION_VISIT_HOURS,
            attraction_visit_fee: DEFAULT_ATTRACTION_VISIT_FEE,
            max_detour_ratio: DEFAULT_MAX_DETOUR_RATIO,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
            max_results: DEFAULT_MAX_RESULTS,
            season_override: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let config = EngineConfig {
            average_speed_kmh: env::var("ROUTE_AVERAGE_SPEED_KMH")
                .unwrap_or_else(|_| defaults.average_speed_kmh.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_AVERAGE_SPEED_KMH".into()))?,

            cost_per_km: env::var("ROUTE_COST_PER_KM")
                .unwrap_or_else(|_| defaults.cost_per_km.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_COST_PER_KM".into()))?,

            attraction_visit_hours: env::var("ROUTE_ATTRACTION_VISIT_HOURS")
                .unwrap_or_else(|_| defaults.attraction_visit_hours.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_ATTRACTION_VISIT_HOURS".into()))?,

            attraction_visit_fee: env::var("ROUTE_ATTRACTION_VISIT_FEE")
                .unwrap_or_else(|_| defaults.attraction_visit_fee.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_ATTRACTION_VISIT_FEE".into()))?,

            max_detour_ratio: env::var("ROUTE_MAX_DETOUR_RATIO")
                .unwrap_or_else(|_| defaults.max_detour_ratio.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_MAX_DETOUR_RATIO".into()))?,

            max_waypoints: env::var("ROUTE_MAX_WAYPOINTS")
                .unwrap_or_else(|_| defaults.max_waypoints.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_MAX_WAYPOINTS".into()))?,

            max_results: env::var("ROUTE_MAX_RESULTS")
                .unwrap_or_else(|_| defaults.max_results.to_string())
                .parse()
                .map_err(|_| EngineError::Config("Invalid ROUTE_MAX_RESULTS".into()))?,

            season_override: match env::var("ROUTE_SEASON_OVERRIDE") {
                Ok(value) => Some(
                    value
                        .parse()
                        .map_err(|e| EngineError::Config(format!("ROUTE_SEASON_OVERRIDE: {}", e)))?,
                ),
                Err(_) => None,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.average_speed_kmh <= 0.0 {
            return Err(EngineError::Config(
                "average_speed_kmh must be positive".into(),
            ));
        }
        if self.cost_per_km < 0.0 {
            return Err(EngineError::Config("cost_per_km must not be negative".into()));
        }
        if self.max_detour_ratio <= 1.0 {
            return Err(EngineError::Config(
                "max_detour_ratio must be greater than 1.0".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(EngineError::Config("max_results must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.average_speed_kmh, 80.0);
        assert_eq!(config.max_waypoints, 3);
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.average_speed_kmh = 0.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.max_detour_ratio = 1.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.max_results = 0;
        assert!(config.validate().is_err());
    }
}
