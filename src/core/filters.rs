use crate::core::tables::{acceptable_crowds, companion_keywords, interest_phrases, month_name};
use crate::models::{CompanionType, Interest, TravelStyle};

/// Fraction (0.0 to 1.0) of requested interests with evidence in the activities
///
/// `activities` must already be the lower-cased flattened text. An interest
/// matches when any of its phrases is a substring of it. Returns 0 when no
/// interests were requested.
#[inline]
pub fn interest_fraction(activities: &str, interests: &[Interest]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let matched = interests
        .iter()
        .filter(|interest| {
            interest_phrases(interest)
                .iter()
                .any(|phrase| activities.contains(phrase))
        })
        .count();

    matched as f64 / interests.len() as f64
}

/// Crowd fit factor: 1.0 for an exact acceptable label, 0.5 when the labels
/// contain one another, otherwise 0.0
#[inline]
pub fn crowd_fit(crowd: Option<&str>, style: Option<&TravelStyle>) -> f64 {
    let (crowd, style) = match (crowd, style) {
        (Some(crowd), Some(style)) if !crowd.is_empty() => (crowd, style),
        _ => return 0.0,
    };

    let acceptable = acceptable_crowds(style);

    if acceptable.iter().any(|label| *label == crowd) {
        1.0
    } else if acceptable
        .iter()
        .any(|label| crowd.contains(label) || label.contains(crowd))
    {
        0.5
    } else {
        0.0
    }
}

/// Seasonal fit factor for a travel month against free-text `best_time`
///
/// 1.0 when the month name appears, 0.7 for "all year" or for "winter" with a
/// month of October or later, otherwise 0.0. January and February do not get
/// the winter credit.
#[inline]
pub fn seasonal_fit(best_time: Option<&str>, travel_month: Option<u8>) -> f64 {
    let (best_time, month) = match (best_time, travel_month) {
        (Some(best_time), Some(month)) => (best_time.to_lowercase(), month),
        _ => return 0.0,
    };

    let name = match month_name(month) {
        Some(name) => name.to_lowercase(),
        None => return 0.0,
    };

    if best_time.contains(&name) {
        1.0
    } else if best_time.contains("all year") || (best_time.contains("winter") && month >= 10) {
        0.7
    } else {
        0.0
    }
}

/// Companion fit factor: 1.0 when any keyword occurs in the activities text
#[inline]
pub fn companion_fit(activities: &str, companion: Option<&CompanionType>) -> f64 {
    match companion {
        Some(companion)
            if companion_keywords(companion)
                .iter()
                .any(|keyword| activities.contains(keyword)) =>
        {
            1.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_fraction() {
        let activities = "beach walk, sunset views, seafood shacks";

        assert_eq!(interest_fraction(activities, &[]), 0.0);
        assert_eq!(interest_fraction(activities, &[Interest::Beaches]), 1.0);
        assert_eq!(
            interest_fraction(activities, &[Interest::Beaches, Interest::Food]),
            1.0
        );
        assert_eq!(
            interest_fraction(activities, &[Interest::Beaches, Interest::Wildlife]),
            0.5
        );
        assert_eq!(
            interest_fraction(activities, &[Interest::Other("shopping".into())]),
            0.0
        );
    }

    #[test]
    fn test_crowd_fit_exact() {
        assert_eq!(crowd_fit(Some("Low"), Some(&TravelStyle::Relaxed)), 1.0);
    }

    #[test]
    fn test_crowd_fit_partial() {
        // "Moderate" is contained in "Moderate to High"
        assert_eq!(crowd_fit(Some("High"), Some(&TravelStyle::Moderate)), 0.5);
        assert_eq!(crowd_fit(Some("Low (weekdays)"), Some(&TravelStyle::Relaxed)), 0.5);
    }

    #[test]
    fn test_crowd_fit_none() {
        assert_eq!(crowd_fit(Some("Very High"), Some(&TravelStyle::Relaxed)), 0.0);
        assert_eq!(crowd_fit(None, Some(&TravelStyle::Relaxed)), 0.0);
        assert_eq!(crowd_fit(Some(""), Some(&TravelStyle::Relaxed)), 0.0);
        assert_eq!(crowd_fit(Some("Low"), None), 0.0);
    }

    #[test]
    fn test_seasonal_fit_month_name() {
        assert_eq!(seasonal_fit(Some("October to March"), Some(10)), 1.0);
        assert_eq!(seasonal_fit(Some("october to march"), Some(3)), 1.0);
    }

    #[test]
    fn test_seasonal_fit_partial() {
        assert_eq!(seasonal_fit(Some("All Year"), Some(6)), 0.7);
        assert_eq!(seasonal_fit(Some("Winter"), Some(11)), 0.7);
    }

    #[test]
    fn test_seasonal_fit_winter_ignores_january() {
        assert_eq!(seasonal_fit(Some("Winter"), Some(1)), 0.0);
        assert_eq!(seasonal_fit(Some("Winter"), Some(2)), 0.0);
    }

    #[test]
    fn test_seasonal_fit_missing() {
        assert_eq!(seasonal_fit(None, Some(5)), 0.0);
        assert_eq!(seasonal_fit(Some("All year"), None), 0.0);
        assert_eq!(seasonal_fit(Some("All year"), Some(13)), 0.0);
    }

    #[test]
    fn test_companion_fit() {
        let activities = "boat ride, bird watching";
        assert_eq!(companion_fit(activities, Some(&CompanionType::Couple)), 1.0);
        assert_eq!(companion_fit(activities, Some(&CompanionType::Friends)), 0.0);
        assert_eq!(companion_fit(activities, None), 0.0);
    }
}
