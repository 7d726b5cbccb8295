// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Activities, BoundingBox, CompanionType, Destination, DestinationId, GeoPoint, Interest,
    LocalizedName, NearbyDestination, Preferences, Rating, RouteStop, ScoreBreakdown,
    ScoredDestination, ScoringWeights, TravelStyle,
};
pub use requests::{ListQuery, NearbyQuery, OptimizeRouteRequest, RecommendationsRequest};
pub use responses::{
    DestinationSummary, DestinationsResponse, ErrorResponse, HealthResponse, NearbyResponse,
    RecommendationsResponse, RouteResponse, RouteSummary,
};
