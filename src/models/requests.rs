use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{DestinationId, GeoPoint, Preferences};

/// Request for ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_travel_month"))]
    pub preferences: Preferences,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub explain: bool,
}

fn default_lang() -> String {
    "en".to_string()
}

fn validate_travel_month(preferences: &Preferences) -> Result<(), ValidationError> {
    match preferences.travel_month {
        Some(month) if !(1..=12).contains(&month) => {
            let mut error = ValidationError::new("travel_month");
            error.message = Some("travelMonth must be between 1 and 12".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

/// Request to order a set of catalog destinations into a route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_start_pair"))]
pub struct OptimizeRouteRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(alias = "destination_ids", rename = "destinationIds")]
    pub destination_ids: Vec<DestinationId>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "start_lat", rename = "startLat", default)]
    pub start_lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "start_lng", rename = "startLng", default)]
    pub start_lng: Option<f64>,
}

impl OptimizeRouteRequest {
    /// Start coordinate, when both halves were supplied
    pub fn start(&self) -> Option<GeoPoint> {
        match (self.start_lat, self.start_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

fn validate_start_pair(req: &OptimizeRouteRequest) -> Result<(), ValidationError> {
    if req.start_lat.is_some() != req.start_lng.is_some() {
        let mut error = ValidationError::new("start");
        error.message = Some("startLat and startLng must be supplied together".into());
        return Err(error);
    }
    Ok(())
}

/// Query for destinations near a coordinate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub radius_km: f64,
    #[serde(default = "default_nearby_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u16,
}

fn default_radius_km() -> f64 {
    50.0
}

fn default_nearby_limit() -> u16 {
    10
}

/// Query for the destination listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_lang")]
    pub lang: String,
}
