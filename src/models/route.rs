use crate::constants::{HIGHWAY_MIN_KM, INTERCITY_MIN_KM};
use crate::error::{EngineError, Result};
use crate::models::preferences::UserPreferences;
use crate::models::Attraction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use time::{Month, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Direct,
    WithWaypoint,
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteType::Direct => write!(f, "direct"),
            RouteType::WithWaypoint => write!(f, "with_waypoint"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Highway,
    Intercity,
    Local,
}

impl RoadType {
    /// Classify a segment by its length. Long hauls run on highways,
    /// mid-range legs on intercity roads, the rest on local roads.
    pub fn from_distance(distance_km: f64) -> Self {
        if distance_km >= HIGHWAY_MIN_KM {
            RoadType::Highway
        } else if distance_km >= INTERCITY_MIN_KM {
            RoadType::Intercity
        } else {
            RoadType::Local
        }
    }

    /// Baseline safety rating in [0, 5] for this road class.
    pub fn safety_rating(&self) -> f64 {
        match self {
            RoadType::Highway => 4.5,
            RoadType::Intercity => 4.0,
            RoadType::Local => 3.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season for the current calendar month (UTC).
    pub fn current() -> Self {
        Self::from_month(OffsetDateTime::now_utc().month())
    }

    pub fn from_month(month: Month) -> Self {
        match month {
            Month::March | Month::April | Month::May => Season::Spring,
            Month::June | Month::July | Month::August => Season::Summer,
            Month::September | Month::October | Month::November => Season::Fall,
            _ => Season::Winter,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(format!("Invalid season: '{}'", s)),
        }
    }
}

/// Per-season adjustment multipliers for a route segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeasonalFactors {
    pub temperature: f64,
    pub tourism: f64,
    pub road_condition: f64,
    pub cost: f64,
}

impl SeasonalFactors {
    pub const NEUTRAL: SeasonalFactors = SeasonalFactors {
        temperature: 1.0,
        tourism: 1.0,
        road_condition: 1.0,
        cost: 1.0,
    };
}

/// Season -> multiplier table carried by each segment. The default table is
/// the standard tourism calendar; segments share it unless reference data
/// overrides per-segment values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeasonalFactorTable {
    pub spring: SeasonalFactors,
    pub summer: SeasonalFactors,
    pub fall: SeasonalFactors,
    pub winter: SeasonalFactors,
}

impl SeasonalFactorTable {
    pub fn factors(&self, season: Season) -> SeasonalFactors {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }
}

impl Default for SeasonalFactorTable {
    fn default() -> Self {
        SeasonalFactorTable {
            spring: SeasonalFactors {
                temperature: 1.2,
                tourism: 1.3,
                road_condition: 1.1,
                cost: 1.1,
            },
            summer: SeasonalFactors {
                temperature: 0.8,
                tourism: 0.9,
                road_condition: 1.0,
                cost: 0.9,
            },
            fall: SeasonalFactors {
                temperature: 1.1,
                tourism: 1.2,
                road_condition: 1.0,
                cost: 1.0,
            },
            winter: SeasonalFactors {
                temperature: 0.7,
                tourism: 0.8,
                road_condition: 0.8,
                cost: 0.8,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSegment {
    pub origin_id: Uuid,
    pub destination_id: Uuid,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub cost: f64,
    /// Scenic rating in [0, 5]
    pub scenic_rating: f64,
    /// Cultural-significance rating in [0, 5]
    pub cultural_rating: f64,
    /// Safety rating in [0, 5]
    pub safety_rating: f64,
    pub road_type: RoadType,
    #[serde(default)]
    pub seasonal_factors: SeasonalFactorTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub id: Uuid,
    pub route_type: RouteType,
    /// 1 segment (direct) or 2 (via one waypoint)
    pub segments: Vec<RouteSegment>,
    pub total_distance_km: f64,
    pub total_duration_hours: f64,
    pub total_cost: f64,
    /// Attractions at the segment endpoints, deduplicated by id
    pub attractions: Vec<Attraction>,
    /// Name of the intermediate location for `with_waypoint` candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_location: Option<String>,
    /// Population of the intermediate location (0 for direct candidates);
    /// feeds the quiet criterion
    pub waypoint_population: u64,
    /// Composite score in [0, 5], attached by the scorer
    pub score: f64,
}

impl RouteCandidate {
    /// Build a candidate from its segments. Aggregates are segment sums by
    /// construction, so the totals always match the segment values.
    pub fn from_segments(
        route_type: RouteType,
        segments: Vec<RouteSegment>,
        attractions: Vec<Attraction>,
        intermediate_location: Option<String>,
        waypoint_population: u64,
    ) -> Self {
        let total_distance_km = segments.iter().map(|s| s.distance_km).sum();
        let total_duration_hours = segments.iter().map(|s| s.duration_hours).sum();
        let total_cost = segments.iter().map(|s| s.cost).sum();

        RouteCandidate {
            id: Uuid::new_v4(),
            route_type,
            segments,
            total_distance_km,
            total_duration_hours,
            total_cost,
            attractions,
            intermediate_location,
            waypoint_population,
            score: 0.0, // Attached by the scorer
        }
    }
}

/// An attraction near a candidate's corridor, with its perpendicular
/// distance from the closest segment.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyAttraction {
    pub attraction: Attraction,
    pub distance_from_route_km: f64,
}

// Request types for the engine API

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Hard budget ceiling; candidates costing more are dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Hard trip-length ceiling in days (duration_days * 24 hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Locations that must not appear as waypoints
    #[serde(default)]
    pub avoid: HashSet<String>,
    /// Overrides the configured maximum result count when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl RecommendRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        RecommendRequest {
            origin: origin.into(),
            destination: destination.into(),
            preferences: UserPreferences::default(),
            budget: None,
            duration_days: None,
            avoid: HashSet::new(),
            max_results: None,
        }
    }

    pub fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }

    pub fn with_avoid(mut self, avoid: impl IntoIterator<Item = String>) -> Self {
        self.avoid = avoid.into_iter().collect();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(EngineError::InvalidRequest(
                "origin must not be empty".to_string(),
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(EngineError::InvalidRequest(
                "destination must not be empty".to_string(),
            ));
        }
        if let Some(budget) = self.budget {
            if budget <= 0.0 {
                return Err(EngineError::InvalidRequest(
                    "budget must be positive".to_string(),
                ));
            }
        }
        if let Some(days) = self.duration_days {
            if days == 0 {
                return Err(EngineError::InvalidRequest(
                    "duration_days must be at least 1".to_string(),
                ));
            }
        }
        if self.max_results == Some(0) {
            return Err(EngineError::InvalidRequest(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
