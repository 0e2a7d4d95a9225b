pub mod coordinates;
pub mod location;
pub mod preferences;
pub mod route;

pub use coordinates::Coordinates;
pub use location::{Attraction, AttractionCategory, CulturalAttributes, Location};
pub use preferences::{
    BudgetTier, Criterion, PreferencePatch, TravelStyle, UserPreferences, WeightVector,
};
pub use route::{
    NearbyAttraction, RecommendRequest, RoadType, RouteCandidate, RouteSegment, RouteType, Season,
    SeasonalFactorTable, SeasonalFactors,
};
