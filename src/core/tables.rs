//! Static lookup tables used by the scorer.

use crate::models::{CompanionType, Interest, TravelStyle};

/// Activity phrases that count as evidence for an interest
pub fn interest_phrases(interest: &Interest) -> &'static [&'static str] {
    match interest {
        Interest::Beaches => &["beach", "swimming", "sunbathing", "surfing", "sunset", "seashore"],
        Interest::Temples => &["temple", "darshan", "pilgrimage", "shrine", "monastery", "spiritual"],
        Interest::Wildlife => &["wildlife", "safari", "bird watching", "dolphin", "tiger", "crocodile", "jungle"],
        Interest::Adventure => &["trekking", "hiking", "rafting", "camping", "water sports", "rock climbing", "zip line"],
        Interest::Culture => &["heritage", "museum", "handicraft", "dance", "festival", "architecture", "art gallery"],
        Interest::Food => &["food", "cuisine", "seafood", "street food", "sweets", "mahaprasad"],
        Interest::Other(_) => &[],
    }
}

/// Crowd labels considered a good fit for a travel style
pub fn acceptable_crowds(style: &TravelStyle) -> &'static [&'static str] {
    match style {
        TravelStyle::Relaxed => &["Low", "Low to Moderate", "Very Low"],
        TravelStyle::Moderate => &["Moderate", "Low to Moderate", "Moderate to High"],
        TravelStyle::Adventure => &["Low", "Very Low", "Seasonal"],
        TravelStyle::Other(_) => &[],
    }
}

/// Activity keywords that suit a companion type
pub fn companion_keywords(companion: &CompanionType) -> &'static [&'static str] {
    match companion {
        CompanionType::Solo => &["trekking", "meditation", "photography", "hiking", "backpacking"],
        CompanionType::Couple => &["beach", "sunset", "boat ride", "relaxation"],
        CompanionType::Family => &["picnic", "park", "museum", "temple", "zoo", "boating"],
        CompanionType::Friends => &["adventure", "water sports", "camping", "trekking", "nightlife"],
        CompanionType::Other(_) => &[],
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English month name for 1-12
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[usize::from(month) - 1]),
        _ => None,
    }
}
