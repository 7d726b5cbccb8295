use serde::{Deserialize, Serialize};
use crate::models::domain::{DestinationId, NearbyDestination, RouteStop, ScoredDestination};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredDestination>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Aggregate figures for an ordered route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    #[serde(rename = "totalDistanceKm")]
    pub total_distance_km: f64,
    #[serde(rename = "routedStops")]
    pub routed_stops: usize,
    #[serde(rename = "unroutedStops")]
    pub unrouted_stops: usize,
    #[serde(rename = "estimatedDriveMinutes")]
    pub estimated_drive_minutes: u32,
}

impl RouteSummary {
    /// Summarise a route; drive time assumes a constant average speed
    pub fn from_stops(stops: &[RouteStop], average_speed_kmh: f64) -> Self {
        let total_distance_km: f64 = stops.iter().filter_map(|s| s.distance_from_previous).sum();
        let unrouted_stops = stops
            .iter()
            .filter(|s| s.destination.coordinates().is_none())
            .count();

        let estimated_drive_minutes = if average_speed_kmh > 0.0 {
            (total_distance_km / average_speed_kmh * 60.0).round() as u32
        } else {
            0
        };

        Self {
            total_distance_km,
            routed_stops: stops.len() - unrouted_stops,
            unrouted_stops,
            estimated_drive_minutes,
        }
    }
}

/// Response for the route optimisation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub stops: Vec<RouteStop>,
    pub summary: RouteSummary,
}

/// Response for the nearby destinations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyResponse {
    pub destinations: Vec<NearbyDestination>,
}

/// Compact catalog entry with its name resolved for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: DestinationId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub rating: f64,
}

/// Response for the destination listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<DestinationSummary>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub destinations: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
