use routewise::models::{
    Attraction, AttractionCategory, Coordinates, CulturalAttributes, Location,
};
use routewise::{EngineConfig, LocationCatalog, RouteEngine};

/// Engine pinned to spring so rankings do not drift with the calendar.
pub fn test_engine() -> RouteEngine {
    RouteEngine::new(test_config())
}

pub fn test_config() -> EngineConfig {
    EngineConfig {
        season_override: Some("spring".parse().unwrap()),
        ..EngineConfig::default()
    }
}

pub fn location(name: &str, lat: f64, lng: f64) -> Location {
    Location::new(name.to_string(), Coordinates::new(lat, lng).unwrap())
}

pub fn attraction(name: &str, lat: f64, lng: f64, rating: f32) -> Attraction {
    Attraction::new(
        name.to_string(),
        AttractionCategory::Monument,
        Coordinates::new(lat, lng).unwrap(),
        rating,
    )
}

/// CityA at the origin, CityB 10 degrees east along the equator
/// (~1112 km), and a waypoint north of the midpoint with detour
/// ratio ~1.17.
pub fn equator_catalog() -> LocationCatalog {
    LocationCatalog::new(vec![
        location("CityA", 0.0, 0.0),
        location("CityB", 0.0, 10.0),
        location("Waypoint", 3.0, 5.0).with_population(250_000),
    ])
}

/// A small cultural itinerary: three cities with attractions and
/// heritage flags.
pub fn heritage_catalog() -> LocationCatalog {
    LocationCatalog::new(vec![
        location("Tehran", 35.6892, 51.389).with_population(8_700_000),
        location("Isfahan", 32.6546, 51.668)
            .with_population(1_960_000)
            .with_cultural(CulturalAttributes {
                unesco_heritage: true,
                historical: true,
                religious: true,
            })
            .with_attractions(vec![
                attraction("Naqsh-e Jahan Square", 32.6577, 51.6775, 4.8)
                    .with_cultural_significance(5.0),
                attraction("Khaju Bridge", 32.6311, 51.6775, 4.6).with_cultural_significance(4.0),
            ]),
        location("Kashan", 33.985, 51.41)
            .with_population(305_000)
            .with_cultural(CulturalAttributes {
                unesco_heritage: false,
                historical: true,
                religious: false,
            })
            .with_attractions(vec![
                attraction("Fin Garden", 33.985, 51.41, 4.5).with_cultural_significance(4.5)
            ]),
        location("Shiraz", 29.5916, 52.5836).with_population(1_870_000),
    ])
}
