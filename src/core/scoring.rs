use crate::core::filters::{companion_fit, crowd_fit, interest_fraction, seasonal_fit};
use crate::models::{Destination, Preferences, ScoreBreakdown, ScoringWeights};

/// Calculate a match score (0-100) for a destination
///
/// Scoring formula, with the default weights:
/// score = round(
///     interest_fraction * 40 +    # share of requested interests found in activities
///     rating / 5 * 20 +           # always counted, even without preferences
///     crowd_fit * 20 +            # 1.0 exact label, 0.5 overlapping label
///     seasonal_fit * 10 +         # 1.0 month named, 0.7 all year / late-year winter
///     companion_fit * 10          # any companion keyword in activities
/// )
///
/// The earned points are normalised by the sum of the weights, so custom
/// weights still produce a 0-100 score.
pub fn calculate_match_score(
    destination: &Destination,
    preferences: &Preferences,
    weights: &ScoringWeights,
) -> u8 {
    let breakdown = score_breakdown(destination, preferences, weights);
    score_from_breakdown(&breakdown, weights)
}

/// Final 0-100 score for an already computed breakdown
#[inline]
pub fn score_from_breakdown(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u8 {
    normalize(breakdown.earned(), weights.total())
}

/// Earned points per sub-score, before normalisation
pub fn score_breakdown(
    destination: &Destination,
    preferences: &Preferences,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let activities = destination.activities.flattened();

    ScoreBreakdown {
        interest: interest_fraction(&activities, &preferences.interests) * weights.interest,
        rating: destination.rating_value() / 5.0 * weights.rating,
        crowd: crowd_fit(destination.crowd.as_deref(), preferences.travel_style.as_ref())
            * weights.crowd,
        season: seasonal_fit(destination.best_time.as_deref(), preferences.travel_month)
            * weights.season,
        companion: companion_fit(&activities, preferences.companion_type.as_ref())
            * weights.companion,
    }
}

/// Scale earned points to 0-100, rounding half away from zero
#[inline]
fn normalize(earned: f64, total_weight: f64) -> u8 {
    if total_weight <= 0.0 || !earned.is_finite() {
        return 0;
    }

    (earned / total_weight * 100.0).round().clamp(0.0, 100.0) as u8
}
