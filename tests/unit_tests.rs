// Unit tests for Yatra Algo

use yatra_algo::core::{
    distance::{haversine_distance, calculate_bounding_box, is_within_bounding_box},
    filters::{crowd_fit, seasonal_fit},
    scoring::calculate_match_score,
};
use yatra_algo::models::{
    Activities, CompanionType, Destination, Interest, Preferences, Rating, ScoringWeights,
    TravelStyle,
};

const BHUBANESWAR: (f64, f64) = (20.2961, 85.8245);
const PURI: (f64, f64) = (19.8135, 85.8312);

fn create_destination(rating: Rating, crowd: &str, activities: Activities, best_time: &str) -> Destination {
    let mut destination = Destination::new("test", "Test Destination");
    destination.rating = Some(rating);
    destination.crowd = Some(crowd.to_string());
    destination.activities = activities;
    destination.best_time = Some(best_time.to_string());
    destination
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(BHUBANESWAR.0, BHUBANESWAR.1, BHUBANESWAR.0, BHUBANESWAR.1);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_distance_bhubaneswar_to_puri() {
    let distance = haversine_distance(BHUBANESWAR.0, BHUBANESWAR.1, PURI.0, PURI.1);
    assert!((distance - 53.0).abs() <= 2.0, "expected ~53km, got {}", distance);
}

#[test]
fn test_haversine_symmetry() {
    let points = [
        (20.2961, 85.8245),
        (19.8135, 85.8312),
        (21.8333, 86.3333),
        (-33.8688, 151.2093),
        (51.5074, -0.1278),
    ];

    for a in &points {
        for b in &points {
            let there = haversine_distance(a.0, a.1, b.0, b.1);
            let back = haversine_distance(b.0, b.1, a.0, a.1);
            assert!((there - back).abs() < 1e-9, "asymmetric for {:?} {:?}", a, b);
            assert!(there >= 0.0);
        }
    }
}

#[test]
fn test_bounding_box_contains_center() {
    let bbox = calculate_bounding_box(BHUBANESWAR.0, BHUBANESWAR.1, 60.0);

    assert!(is_within_bounding_box(BHUBANESWAR.0, BHUBANESWAR.1, &bbox));
    assert!(is_within_bounding_box(PURI.0, PURI.1, &bbox));
    assert!(!is_within_bounding_box(bbox.max_lat + 0.01, BHUBANESWAR.1, &bbox));
}

#[test]
fn test_empty_preferences_score_is_rating_share() {
    let destination = create_destination(
        Rating::Number(5.0),
        "Low",
        Activities::Text("beach".to_string()),
        "All year",
    );

    let score = calculate_match_score(&destination, &Preferences::default(), &ScoringWeights::default());
    assert_eq!(score, 20);
}

#[test]
fn test_string_rating_is_coerced() {
    let destination = create_destination(
        Rating::Text("2.5".to_string()),
        "Low",
        Activities::default(),
        "",
    );

    let score = calculate_match_score(&destination, &Preferences::default(), &ScoringWeights::default());
    assert_eq!(score, 10);
}

#[test]
fn test_interest_match_is_case_insensitive() {
    let destination = create_destination(
        Rating::Number(0.0),
        "Low",
        Activities::List(vec!["JUNGLE SAFARI".to_string()]),
        "",
    );
    let preferences = Preferences {
        interests: vec![Interest::Wildlife],
        ..Preferences::default()
    };

    let score = calculate_match_score(&destination, &preferences, &ScoringWeights::default());
    assert_eq!(score, 40);
}

#[test]
fn test_partial_interest_match() {
    let destination = create_destination(
        Rating::Number(0.0),
        "Low",
        Activities::List(vec!["Temple darshan".to_string()]),
        "",
    );
    let preferences = Preferences {
        interests: vec![Interest::Temples, Interest::Beaches, Interest::Wildlife],
        ..Preferences::default()
    };

    // 1/3 of 40 = 13.33
    let score = calculate_match_score(&destination, &preferences, &ScoringWeights::default());
    assert_eq!(score, 13);
}

#[test]
fn test_crowd_full_and_half_credit() {
    assert_eq!(crowd_fit(Some("Low"), Some(&TravelStyle::Adventure)), 1.0);
    assert_eq!(crowd_fit(Some("Moderate"), Some(&TravelStyle::Relaxed)), 0.5);
    assert_eq!(crowd_fit(Some("High"), Some(&TravelStyle::Relaxed)), 0.0);
}

#[test]
fn test_winter_in_january_gets_no_seasonal_credit() {
    let destination = create_destination(
        Rating::Number(0.0),
        "Low",
        Activities::default(),
        "Winter",
    );

    let january = Preferences {
        travel_month: Some(1),
        ..Preferences::default()
    };
    let december = Preferences {
        travel_month: Some(12),
        ..Preferences::default()
    };

    let weights = ScoringWeights::default();
    assert_eq!(calculate_match_score(&destination, &january, &weights), 0);
    assert_eq!(calculate_match_score(&destination, &december, &weights), 7);
    assert_eq!(seasonal_fit(Some("Winter"), Some(10)), 0.7);
}

#[test]
fn test_month_named_gets_full_seasonal_credit() {
    assert_eq!(seasonal_fit(Some("Best: NOVEMBER-February"), Some(11)), 1.0);
}

#[test]
fn test_companion_fit_contributes_ten() {
    let destination = create_destination(
        Rating::Number(0.0),
        "Low",
        Activities::Text("Sunset boat ride".to_string()),
        "",
    );
    let preferences = Preferences {
        companion_type: Some(CompanionType::Couple),
        ..Preferences::default()
    };

    let score = calculate_match_score(&destination, &preferences, &ScoringWeights::default());
    assert_eq!(score, 10);
}

#[test]
fn test_perfect_score() {
    let destination = create_destination(
        Rating::Number(5.0),
        "Low",
        Activities::List(vec!["Beach".to_string(), "Sunset".to_string()]),
        "December to February",
    );
    let preferences = Preferences {
        interests: vec![Interest::Beaches],
        travel_style: Some(TravelStyle::Relaxed),
        companion_type: Some(CompanionType::Couple),
        travel_month: Some(12),
    };

    let score = calculate_match_score(&destination, &preferences, &ScoringWeights::default());
    assert_eq!(score, 100);
}
