// Unit tests for Nosh Algo

use nosh_algo::core::{
    distance::{bounding_box, haversine_distance},
    filters::{filter_by_cuisine, matches_cuisine},
    scoring::{distance_score, preference_score},
};
use nosh_algo::models::{Coordinate, UserProfile, Venue};
use std::collections::HashMap;

fn create_venue(id: i64, category: &str, cuisine: &str, lat: f64, lon: f64) -> Venue {
    Venue {
        osm_id: id,
        name: format!("Venue {}", id),
        category: category.to_string(),
        cuisine: cuisine.to_string(),
        latitude: Some(lat),
        longitude: Some(lon),
        tags: HashMap::new(),
    }
}

fn create_profile(cuisines: &[&str], health_goals: &[&str]) -> UserProfile {
    UserProfile {
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        health_goals: health_goals.iter().map(|g| g.to_string()).collect(),
        extra: HashMap::new(),
    }
}

#[test]
fn test_haversine_distance_zero() {
    let taipei = Coordinate {
        latitude: 25.0173,
        longitude: 121.5397,
    };

    let distance = haversine_distance(taipei, taipei);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = Coordinate {
        latitude: 25.0173,
        longitude: 121.5397,
    };
    let b = Coordinate {
        latitude: 25.05,
        longitude: 121.60,
    };

    assert!((haversine_distance(a, b) - haversine_distance(b, a)).abs() < 1e-12);
}

#[test]
fn test_haversine_distance_taipei_main_station() {
    // NTU campus area to Taipei Main Station is roughly 4-5 km
    let campus = Coordinate {
        latitude: 25.0173,
        longitude: 121.5397,
    };
    let station = Coordinate {
        latitude: 25.0478,
        longitude: 121.5170,
    };

    let distance = haversine_distance(campus, station);
    assert!(distance > 3.0 && distance < 6.0);
}

#[test]
fn test_bounding_box_spans_center() {
    let center = Coordinate {
        latitude: 25.0173,
        longitude: 121.5397,
    };
    let bbox = bounding_box(center, 3.0);

    assert!(bbox.min_lat < center.latitude && center.latitude < bbox.max_lat);
    assert!(bbox.min_lon < center.longitude && center.longitude < bbox.max_lon);
}

#[test]
fn test_distance_score_endpoints() {
    assert_eq!(distance_score(0.0), 1.0);
    assert_eq!(distance_score(3.0), 0.0);
    assert_eq!(distance_score(7.5), 0.0);
}

#[test]
fn test_distance_score_monotonic_and_bounded() {
    let mut previous = distance_score(0.0);
    for step in 1..=50 {
        let current = distance_score(step as f64 * 0.1);
        assert!(current <= previous);
        assert!((0.0..=1.0).contains(&current));
        previous = current;
    }
}

#[test]
fn test_preference_score_neutral_for_empty_profile() {
    let profile = create_profile(&[], &[]);
    let venue = create_venue(1, "restaurant", "italian", 25.0, 121.5);

    assert_eq!(preference_score(&profile, &venue), 0.5);
}

#[test]
fn test_preference_score_full_for_single_matching_cuisine() {
    let profile = create_profile(&["taiwanese"], &[]);
    let venue = create_venue(1, "restaurant", "taiwanese;noodle", 25.0, 121.5);

    assert_eq!(preference_score(&profile, &venue), 1.0);
}

#[test]
fn test_preference_score_counts_only_declared_facets() {
    // light goal declared and matched, cuisine facet absent
    let profile = create_profile(&[], &["light"]);
    let venue = create_venue(1, "cafe", "", 25.0, 121.5);

    assert_eq!(preference_score(&profile, &venue), 1.0);
}

#[test]
fn test_cuisine_match_is_case_insensitive() {
    let profile = create_profile(&["japanese"], &[]);
    let venue = create_venue(1, "restaurant", "Japanese;Sushi", 25.0, 121.5);

    assert!(matches_cuisine(&profile, &venue));
}

#[test]
fn test_filter_without_preference_keeps_everything() {
    let profile = create_profile(&[], &[]);
    let venues = vec![
        create_venue(1, "restaurant", "italian", 25.0, 121.5),
        create_venue(2, "cafe", "", 25.0, 121.5),
    ];

    assert_eq!(filter_by_cuisine(&profile, &venues).len(), 2);
}

#[test]
fn test_filter_narrows_by_cuisine() {
    let profile = create_profile(&["thai"], &[]);
    let venues = vec![
        create_venue(1, "restaurant", "thai", 25.0, 121.5),
        create_venue(2, "restaurant", "italian", 25.0, 121.5),
    ];

    let filtered = filter_by_cuisine(&profile, &venues);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].osm_id, 1);
}
