//! Stable engine-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`EngineConfig`](crate::config::EngineConfig) instead.

// --- Travel model defaults (used when ROUTE_* env vars are absent) ---

/// Default average travel speed (km/h) used to derive segment durations.
/// Overridden by `ROUTE_AVERAGE_SPEED_KMH`.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 80.0;
/// Default monetary cost per travelled kilometer.
/// Overridden by `ROUTE_COST_PER_KM`.
pub const DEFAULT_COST_PER_KM: f64 = 0.5;
/// Default sightseeing time (hours) added per attraction at a waypoint,
/// used when the attraction carries no visit duration of its own.
pub const DEFAULT_ATTRACTION_VISIT_HOURS: f64 = 2.0;
/// Default entry fee added per attraction at a waypoint, used when the
/// attraction carries no fee of its own.
pub const DEFAULT_ATTRACTION_VISIT_FEE: f64 = 50.0;

// --- Candidate generation policy defaults ---
// Both are heuristics with no derived optimum; they bound combinatorial
// growth and are exposed as configuration rather than fixed behavior.

/// Maximum accepted detour ratio: (origin->waypoint + waypoint->destination)
/// divided by the direct distance. 1.5 allows at most 50% circuity.
/// Overridden by `ROUTE_MAX_DETOUR_RATIO`.
pub const DEFAULT_MAX_DETOUR_RATIO: f64 = 1.5;
/// Maximum number of waypoint candidates materialized per request.
/// Overridden by `ROUTE_MAX_WAYPOINTS`.
pub const DEFAULT_MAX_WAYPOINTS: usize = 3;
/// Default maximum number of ranked candidates returned.
/// Overridden by `ROUTE_MAX_RESULTS`.
pub const DEFAULT_MAX_RESULTS: usize = 5;

// --- Score scale ---

/// Upper bound of the score scale; every sub-score and the final composite
/// live in [0, SCORE_MAX].
pub const SCORE_MAX: f64 = 5.0;
/// Neutral midpoint of the score scale, predicted by the null-object
/// score predictor.
pub const SCORE_MIDPOINT: f64 = 2.5;

// --- Composite weighting table defaults ---
// Relative weights per criterion; the merged table is re-normalized before
// use so the absolute values only matter relative to each other.

/// Default weight for the speed (distance) criterion.
pub const WEIGHT_SPEED: f64 = 0.20;
/// Default weight for the duration criterion.
pub const WEIGHT_DURATION: f64 = 0.20;
/// Default weight for the cost criterion.
pub const WEIGHT_COST: f64 = 0.25;
/// Default weight for the cultural criterion.
pub const WEIGHT_CULTURAL: f64 = 0.20;
/// Default weight for the scenic criterion.
pub const WEIGHT_SCENIC: f64 = 0.15;
/// Default weight for the quiet criterion. Zero unless the caller asks.
pub const WEIGHT_QUIET: f64 = 0.0;

// --- Sub-score normalization coefficients ---

/// Kilometers per lost score point for the speed sub-score:
/// `max(0, 5 - km / 100)` reaches zero at 500 km.
pub const SPEED_SCORE_KM_DIVISOR: f64 = 100.0;
/// Hours per two lost score points for the duration sub-score:
/// `max(0, 5 - hours / 2)` reaches zero at 10 h.
pub const DURATION_SCORE_HOURS_DIVISOR: f64 = 2.0;
/// Population scale for the quiet sub-score: `5 / (1 + pop / 1_000_000)`.
pub const QUIET_POPULATION_DIVISOR: f64 = 1_000_000.0;
/// Flat bonus added to the cultural sub-score when the caller declared
/// cultural interests.
pub const CULTURAL_INTEREST_BONUS: f64 = 0.5;

// --- Budget tier ceilings (route currency units) ---

/// Cost ceiling for the `low` budget tier.
pub const BUDGET_CEILING_LOW: f64 = 200_000.0;
/// Cost ceiling for the `medium` budget tier.
pub const BUDGET_CEILING_MEDIUM: f64 = 500_000.0;
/// Cost ceiling for the `high` budget tier.
pub const BUDGET_CEILING_HIGH: f64 = 1_000_000.0;
/// Cost ceiling for the `luxury` budget tier.
pub const BUDGET_CEILING_LUXURY: f64 = 2_000_000.0;

// --- Travel-style adjustment coefficients ---

/// Cost above which a `budget`-style traveler's candidates are penalized.
pub const BUDGET_STYLE_COST_THRESHOLD: f64 = 300_000.0;
/// Multiplier applied when the budget-style threshold is exceeded.
pub const BUDGET_STYLE_PENALTY: f64 = 0.8;
/// Cost below which a `luxury`-style traveler's candidates are penalized.
pub const LUXURY_STYLE_COST_THRESHOLD: f64 = 500_000.0;
/// Multiplier applied when a candidate undercuts the luxury threshold.
pub const LUXURY_STYLE_PENALTY: f64 = 0.9;
/// Group size above which the bulk-friendly bonus applies.
pub const LARGE_GROUP_SIZE: u32 = 4;
/// Multiplier applied for groups larger than [`LARGE_GROUP_SIZE`].
pub const LARGE_GROUP_BONUS: f64 = 1.1;

// --- Learned-score blend ---

/// Weight given to a learned prediction when blending with the rule-based
/// composite: `rule * (1 - w) + prediction * w`.
pub const LEARNED_BLEND_WEIGHT: f64 = 0.3;

// --- Cultural significance derivation weights ---
// Contribution of each cultural-attribute flag to a location's
// cultural-significance rating, before capping at SCORE_MAX.

/// Weight contributed by a UNESCO world-heritage designation.
pub const CULTURAL_WEIGHT_UNESCO: f64 = 1.5;
/// Weight contributed by recognized historical significance.
pub const CULTURAL_WEIGHT_HISTORICAL: f64 = 1.3;
/// Weight contributed by recognized religious significance.
pub const CULTURAL_WEIGHT_RELIGIOUS: f64 = 1.2;

// --- Segment attribute fallbacks ---

/// Scenic rating assumed for a segment whose destination has no rated
/// attractions.
pub const DEFAULT_SCENIC_RATING: f64 = 3.0;

// --- Road-type classification thresholds (km) ---

/// Segments at least this long are classified as highway travel.
pub const HIGHWAY_MIN_KM: f64 = 300.0;
/// Segments at least this long (but below highway) are intercity roads.
pub const INTERCITY_MIN_KM: f64 = 50.0;

// --- Attractions-near-route defaults ---

/// Default corridor radius (km) for the attractions-near-route query.
pub const DEFAULT_NEAR_ROUTE_RADIUS_KM: f64 = 50.0;

// --- Preference store defaults ---

/// Default TTL for cached per-user preference profiles: 24 hours.
pub const DEFAULT_PREFERENCE_TTL_SECONDS: u64 = 86_400;
/// Maximum entries for the in-memory preference store (LRU-style eviction).
pub const DEFAULT_PREFERENCE_STORE_CAPACITY: u64 = 10_000;
