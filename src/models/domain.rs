use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination identifier, either a string or an integer in the catalog JSON
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DestinationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationId::Number(n) => write!(f, "{}", n),
            DestinationId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DestinationId {
    fn from(value: i64) -> Self {
        DestinationId::Number(value)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        DestinationId::Text(value.to_string())
    }
}

impl DestinationId {
    /// Parse an id from a URL segment: integers become `Number`
    pub fn from_path(segment: &str) -> Self {
        segment
            .parse::<i64>()
            .map(DestinationId::Number)
            .unwrap_or_else(|_| DestinationId::Text(segment.to_string()))
    }
}

/// Display name: a plain string or a language code -> text mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedName {
    Plain(String),
    ByLanguage(serde_json::Map<String, serde_json::Value>),
}

impl LocalizedName {
    /// Resolve the name for `lang`, falling back to `en`, then to the first
    /// available value, then to the empty string
    pub fn resolve(&self, lang: &str) -> &str {
        match self {
            LocalizedName::Plain(name) => name,
            LocalizedName::ByLanguage(names) => names
                .get(lang)
                .and_then(|v| v.as_str())
                .or_else(|| names.get("en").and_then(|v| v.as_str()))
                .or_else(|| names.values().find_map(|v| v.as_str()))
                .unwrap_or(""),
        }
    }
}

impl Default for LocalizedName {
    fn default() -> Self {
        LocalizedName::Plain(String::new())
    }
}

/// Rating as stored in the catalog: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Rating {
    /// Coerce to a float; unparseable or non-finite values become 0
    pub fn value(&self) -> f64 {
        let raw = match self {
            Rating::Number(n) => *n,
            Rating::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };

        if raw.is_finite() {
            raw
        } else {
            0.0
        }
    }
}

/// Activities: a list of free-text phrases or a single free-text string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Activities {
    List(Vec<String>),
    Text(String),
}

impl Activities {
    /// Flatten into one lower-cased blob for substring matching
    pub fn flattened(&self) -> String {
        match self {
            Activities::List(items) => items.join(" ").to_lowercase(),
            Activities::Text(text) => text.to_lowercase(),
        }
    }
}

impl Default for Activities {
    fn default() -> Self {
        Activities::List(Vec::new())
    }
}

/// A point of interest from the locations catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd: Option<String>,
    #[serde(default)]
    pub activities: Activities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
}

impl Destination {
    /// Minimal record with only an id and a plain name
    pub fn new(id: impl Into<DestinationId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: LocalizedName::Plain(name.to_string()),
            lat: None,
            lng: None,
            rating: None,
            crowd: None,
            activities: Activities::default(),
            best_time: None,
            category: None,
            district: None,
            description: None,
            image: None,
            entry_fee: None,
        }
    }

    pub fn display_name(&self, lang: &str) -> &str {
        self.name.resolve(lang)
    }

    /// Collapse localized name and description to plain strings for `lang`
    pub fn localize(&mut self, lang: &str) {
        self.name = LocalizedName::Plain(self.name.resolve(lang).to_string());
        if let Some(description) = self.description.as_mut() {
            *description = LocalizedName::Plain(description.resolve(lang).to_string());
        }
    }

    /// Rating as a float, 0 when missing
    pub fn rating_value(&self) -> f64 {
        self.rating.as_ref().map(Rating::value).unwrap_or(0.0)
    }

    /// Coordinates, if both latitude and longitude are present
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }
}

/// Parses preference keywords leniently: trimmed, case-insensitive, and
/// unknown keywords are kept as `Other` so they contribute nothing
macro_rules! lenient_keyword {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.trim().to_lowercase().as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

lenient_keyword!(
    /// Interest category a traveller can ask for
    Interest {
        Beaches => "beaches",
        Temples => "temples",
        Wildlife => "wildlife",
        Adventure => "adventure",
        Culture => "culture",
        Food => "food",
    }
);

lenient_keyword!(
    /// Preferred pace of the trip
    TravelStyle {
        Relaxed => "relaxed",
        Moderate => "moderate",
        Adventure => "adventure",
    }
);

lenient_keyword!(
    /// Who the traveller is going with
    CompanionType {
        Solo => "solo",
        Couple => "couple",
        Family => "family",
        Friends => "friends",
    }
);

/// Traveller preferences; every field is optional and defaults to "not stated"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub interests: Vec<Interest>,
    pub travel_style: Option<TravelStyle>,
    pub companion_type: Option<CompanionType>,
    pub travel_month: Option<u8>,
}

/// Earned points per sub-score, before normalisation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub interest: f64,
    pub rating: f64,
    pub crowd: f64,
    pub season: f64,
    pub companion: f64,
}

impl ScoreBreakdown {
    pub fn earned(&self) -> f64 {
        self.interest + self.rating + self.crowd + self.season + self.companion
    }
}

/// Destination decorated with its match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "scoreBreakdown", default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// One stop of an ordered route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(flatten)]
    pub destination: Destination,
    /// Kilometres from the previous stop (or the start). Absent for a
    /// single-destination route and for stops without coordinates.
    #[serde(rename = "distanceFromPrevious", default, skip_serializing_if = "Option::is_none")]
    pub distance_from_previous: Option<f64>,
}

/// Destination decorated with its distance from a search origin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Scoring weights, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub interest: f64,
    pub rating: f64,
    pub crowd: f64,
    pub season: f64,
    pub companion: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.interest + self.rating + self.crowd + self.season + self.companion
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 40.0,
            rating: 20.0,
            crowd: 20.0,
            season: 10.0,
            companion: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_name_fallbacks() {
        let name: LocalizedName =
            serde_json::from_str(r#"{"or": "ପୁରୀ", "en": "Puri", "hi": "पुरी"}"#).unwrap();
        assert_eq!(name.resolve("hi"), "पुरी");
        assert_eq!(name.resolve("fr"), "Puri");

        let no_english: LocalizedName =
            serde_json::from_str(r#"{"or": "ପୁରୀ", "hi": "पुरी"}"#).unwrap();
        assert_eq!(no_english.resolve("fr"), "ପୁରୀ");

        let empty: LocalizedName = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.resolve("en"), "");

        let plain = LocalizedName::Plain("Konark".to_string());
        assert_eq!(plain.resolve("hi"), "Konark");
    }

    #[test]
    fn test_localize_collapses_names() {
        let mut destination: Destination = serde_json::from_str(
            r#"{"id": 1, "name": {"en": "Puri Beach", "hi": "पुरी बीच"},
                "description": {"en": "Golden sands"}}"#,
        )
        .unwrap();

        destination.localize("hi");

        assert_eq!(destination.name, LocalizedName::Plain("पुरी बीच".to_string()));
        assert_eq!(destination.description, Some(LocalizedName::Plain("Golden sands".to_string())));
        assert_eq!(serde_json::to_value(&destination).unwrap()["name"], "पुरी बीच");
    }

    #[test]
    fn test_rating_coercion() {
        assert_eq!(Rating::Number(4.5).value(), 4.5);
        assert_eq!(Rating::Text(" 4.2 ".to_string()).value(), 4.2);
        assert_eq!(Rating::Text("excellent".to_string()).value(), 0.0);
        assert_eq!(Rating::Text("NaN".to_string()).value(), 0.0);
        assert_eq!(Destination::new(1, "x").rating_value(), 0.0);
    }

    #[test]
    fn test_activities_flattened() {
        let list = Activities::List(vec!["Beach Walk".to_string(), "Sunset Views".to_string()]);
        assert_eq!(list.flattened(), "beach walk sunset views");

        let text = Activities::Text("Boating, Bird Watching".to_string());
        assert_eq!(text.flattened(), "boating, bird watching");
    }

    #[test]
    fn test_destination_deserialize_mixed_shapes() {
        let json = r#"{
            "id": 7,
            "name": {"en": "Chilika Lake"},
            "lat": 19.7,
            "lng": 85.3,
            "rating": "4.6",
            "crowd": "Moderate",
            "activities": "Boat ride, dolphin spotting",
            "best_time": "November to February"
        }"#;
        let destination: Destination = serde_json::from_str(json).unwrap();

        assert_eq!(destination.id, DestinationId::Number(7));
        assert_eq!(destination.display_name("en"), "Chilika Lake");
        assert_eq!(destination.rating_value(), 4.6);
        assert!(destination.coordinates().is_some());
    }

    #[test]
    fn test_lenient_keywords() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"interests": ["Beaches", "shopping"], "travelStyle": "RELAXED", "travelMonth": 11}"#,
        )
        .unwrap();

        assert_eq!(prefs.interests[0], Interest::Beaches);
        assert_eq!(prefs.interests[1], Interest::Other("shopping".to_string()));
        assert_eq!(prefs.travel_style, Some(TravelStyle::Relaxed));
        assert_eq!(prefs.companion_type, None);
        assert_eq!(prefs.travel_month, Some(11));
    }

    #[test]
    fn test_default_weights_sum_to_hundred() {
        assert_eq!(ScoringWeights::default().total(), 100.0);
    }
}
