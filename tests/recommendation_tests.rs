use routewise::models::{Criterion, RecommendRequest, RouteType, UserPreferences, WeightVector};
use routewise::{LocationCatalog, RouteEngine};

mod common;

#[test]
fn direct_route_between_equator_cities() {
    let catalog = common::equator_catalog();
    let engine = common::test_engine();

    let preferences = UserPreferences {
        weights: WeightVector::new().with(Criterion::Speed, 1.0),
        ..Default::default()
    };
    let request =
        RecommendRequest::new("CityA", "CityB").with_preferences(preferences);

    let routes = engine.recommend(&catalog, &request);
    assert!(!routes.is_empty(), "Should recommend at least the direct route");

    let direct = routes
        .iter()
        .find(|r| r.route_type == RouteType::Direct)
        .expect("direct candidate");

    // 10 degrees of longitude on the equator
    assert!(
        (direct.total_distance_km - 1112.0).abs() < 5.0,
        "got {} km",
        direct.total_distance_km
    );
}

#[test]
fn qualifying_waypoint_produces_second_candidate() {
    let catalog = common::equator_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("CityA", "CityB"));

    assert_eq!(routes.len(), 2);
    let waypoint = routes
        .iter()
        .find(|r| r.route_type == RouteType::WithWaypoint)
        .expect("waypoint candidate");
    assert_eq!(waypoint.intermediate_location.as_deref(), Some("Waypoint"));

    // Detour ratio ~1.17: within the 1.5 ceiling but longer than direct
    let direct = routes
        .iter()
        .find(|r| r.route_type == RouteType::Direct)
        .unwrap();
    let ratio = waypoint.total_distance_km / direct.total_distance_km;
    assert!(ratio > 1.0 && ratio < 1.5, "detour ratio {}", ratio);
}

#[test]
fn unresolved_locations_mean_no_route() {
    let catalog = common::equator_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("CityA", "Atlantis"));
    assert!(routes.is_empty());

    let routes = engine.recommend(&catalog, &RecommendRequest::new("Nowhere", "CityB"));
    assert!(routes.is_empty());
}

#[test]
fn same_origin_and_destination_is_a_trivial_route() {
    let catalog = common::equator_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("CityA", "CityA"));

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].route_type, RouteType::Direct);
    assert_eq!(routes[0].total_distance_km, 0.0);
    assert!((0.0..=5.0).contains(&routes[0].score));
}

#[test]
fn avoided_locations_are_never_waypoints() {
    let catalog = common::equator_catalog();
    let engine = common::test_engine();

    let request = RecommendRequest::new("CityA", "CityB")
        .with_avoid(vec!["Waypoint".to_string()]);
    let routes = engine.recommend(&catalog, &request);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].route_type, RouteType::Direct);
}

#[test]
fn budget_below_every_cost_yields_empty_result() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    // Tehran -> Shiraz costs a few hundred units on every candidate
    let request = RecommendRequest::new("Tehran", "Shiraz").with_budget(100.0);
    let routes = engine.recommend(&catalog, &request);
    assert!(routes.is_empty());

    // A generous budget keeps them all
    let request = RecommendRequest::new("Tehran", "Shiraz").with_budget(1_000_000.0);
    let routes = engine.recommend(&catalog, &request);
    assert!(!routes.is_empty());
    for route in &routes {
        assert!(route.total_cost <= 1_000_000.0);
    }
}

#[test]
fn duration_ceiling_filters_long_routes() {
    // ~2500 km is ~31 travel hours: over a one-day ceiling
    let catalog = LocationCatalog::new(vec![
        common::location("Start", 0.0, 0.0),
        common::location("End", 0.0, 22.5),
    ]);
    let engine = common::test_engine();

    let request = RecommendRequest::new("Start", "End").with_duration_days(1);
    assert!(engine.recommend(&catalog, &request).is_empty());

    let request = RecommendRequest::new("Start", "End").with_duration_days(2);
    let routes = engine.recommend(&catalog, &request);
    assert_eq!(routes.len(), 1);
    assert!(routes[0].total_duration_hours <= 48.0);
}

#[test]
fn every_score_is_in_range() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    for (origin, destination) in [
        ("Tehran", "Shiraz"),
        ("Tehran", "Isfahan"),
        ("Kashan", "Shiraz"),
    ] {
        let routes = engine.recommend(&catalog, &RecommendRequest::new(origin, destination));
        assert!(!routes.is_empty());
        for route in &routes {
            assert!(
                (0.0..=5.0).contains(&route.score),
                "{} -> {}: score {} out of range",
                origin,
                destination,
                route.score
            );
        }
    }
}

#[test]
fn results_are_ranked_best_first() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("Tehran", "Shiraz"));
    assert!(routes.len() >= 2);

    for pair in routes.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn recommendation_is_deterministic() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();
    let request = RecommendRequest::new("Tehran", "Shiraz");

    let summary = |routes: &[routewise::models::RouteCandidate]| {
        routes
            .iter()
            .map(|r| {
                (
                    r.route_type,
                    r.intermediate_location.clone(),
                    r.total_distance_km,
                    r.score,
                )
            })
            .collect::<Vec<_>>()
    };

    let first = engine.recommend(&catalog, &request);
    let second = engine.recommend(&catalog, &request);
    assert_eq!(summary(&first), summary(&second));
}

#[test]
fn max_results_override_truncates() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    let request = RecommendRequest::new("Tehran", "Shiraz").with_max_results(1);
    let routes = engine.recommend(&catalog, &request);
    assert_eq!(routes.len(), 1);
}

#[test]
fn invalid_request_yields_empty_list_not_panic() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    let request = RecommendRequest::new("Tehran", "Shiraz").with_budget(-10.0);
    assert!(engine.recommend(&catalog, &request).is_empty());
}

#[test]
fn candidate_aggregates_match_segment_sums() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("Tehran", "Shiraz"));
    for route in &routes {
        let distance: f64 = route.segments.iter().map(|s| s.distance_km).sum();
        let duration: f64 = route.segments.iter().map(|s| s.duration_hours).sum();
        let cost: f64 = route.segments.iter().map(|s| s.cost).sum();

        assert!((route.total_distance_km - distance).abs() < 1e-9);
        assert!((route.total_duration_hours - duration).abs() < 1e-9);
        assert!((route.total_cost - cost).abs() < 1e-9);
    }
}

#[test]
fn attractions_near_route_sorted_by_distance() {
    let catalog = common::heritage_catalog();
    let engine = common::test_engine();

    let routes = engine.recommend(&catalog, &RecommendRequest::new("Tehran", "Shiraz"));
    let direct = routes
        .iter()
        .find(|r| r.route_type == RouteType::Direct)
        .unwrap();

    let nearby = engine.attractions_near_route(&catalog, direct, Some(50.0));
    assert!(
        !nearby.is_empty(),
        "Isfahan and Kashan attractions sit within 50 km of the corridor"
    );

    for pair in nearby.windows(2) {
        assert!(pair[0].distance_from_route_km <= pair[1].distance_from_route_km);
    }
    for item in &nearby {
        assert!(item.distance_from_route_km <= 50.0);
    }
}
