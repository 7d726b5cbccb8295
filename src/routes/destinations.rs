use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{find_nearby, optimize_route, Recommender};
use crate::models::{
    DestinationId, DestinationSummary, DestinationsResponse, ErrorResponse, GeoPoint,
    HealthResponse, ListQuery, NearbyQuery, NearbyResponse, OptimizeRouteRequest,
    RecommendationsRequest, RecommendationsResponse, RouteResponse, RouteSummary,
};
use crate::services::{CacheKey, CacheManager, Catalog};
use std::sync::Arc;

/// Result size limits for the recommendations endpoint
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            default_limit: crate::core::DEFAULT_LIMIT,
            max_limit: 100,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cache: CacheManager,
    pub recommender: Recommender,
    pub limits: Limits,
    pub default_start: GeoPoint,
    pub average_speed_kmh: f64,
}

/// Configure all destination-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(list_destinations))
        .route("/destinations/nearby", web::get().to(nearby_destinations))
        .route("/destinations/{id}", web::get().to(get_destination))
        .route("/recommendations", web::post().to(recommendations))
        .route("/routes/optimize", web::post().to(optimize))
        .route("/cache/stats", web::get().to(cache_stats));
}

fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        destinations: state.catalog.len(),
    })
}

/// List the catalog with names resolved for one language
///
/// GET /api/v1/destinations?lang=hi
async fn list_destinations(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let destinations: Vec<DestinationSummary> = state
        .catalog
        .all()
        .iter()
        .map(|d| DestinationSummary {
            id: d.id.clone(),
            name: d.display_name(&query.lang).to_string(),
            lat: d.lat,
            lng: d.lng,
            rating: d.rating_value(),
        })
        .collect();

    HttpResponse::Ok().json(DestinationsResponse {
        count: destinations.len(),
        destinations,
    })
}

/// GET /api/v1/destinations/{id}
async fn get_destination(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = DestinationId::from_path(&path);

    match state.catalog.get(&id) {
        Some(destination) => HttpResponse::Ok().json(destination),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Destination not found",
            format!("No destination with id {}", id),
        ),
    }
}

/// Ranked recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "interests": ["beaches", "food"],
///     "travelStyle": "relaxed",
///     "companionType": "couple",
///     "travelMonth": 12
///   },
///   "limit": 10,
///   "lang": "en",
///   "explain": false
/// }
/// ```
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit);

    let key = CacheKey::recommendations(&req.preferences, limit, &req.lang, req.explain);
    let cache_key = match key {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!("Failed to build cache key, skipping cache: {}", e);
            None
        }
    };

    if let Some(key) = &cache_key {
        if let Ok(cached) = state.cache.get::<RecommendationsResponse>(key).await {
            tracing::debug!("Serving recommendations from cache");
            return HttpResponse::Ok().json(cached);
        }
    }

    let destinations = state.catalog.all();
    let mut recommendations = if req.explain {
        state
            .recommender
            .explain_recommendations(destinations, &req.preferences, limit)
    } else {
        state
            .recommender
            .get_recommendations(destinations, &req.preferences, limit)
    };

    for recommendation in &mut recommendations {
        recommendation.destination.localize(&req.lang);
    }

    if req.preferences.interests.is_empty() {
        tracing::debug!("Recommendations requested without interests");
    }

    let response = RecommendationsResponse {
        recommendations,
        total_candidates: destinations.len(),
    };

    tracing::info!(
        "Returning {} recommendations (from {} candidates)",
        response.recommendations.len(),
        response.total_candidates
    );

    if let Some(key) = &cache_key {
        if let Err(e) = state.cache.set(key, &response).await {
            tracing::warn!("Failed to cache recommendations: {}", e);
        }
    }

    HttpResponse::Ok().json(response)
}

/// Route ordering endpoint
///
/// POST /api/v1/routes/optimize
///
/// Request body:
/// ```json
/// {
///   "destinationIds": [1, "konark-sun-temple"],
///   "startLat": 20.2961,
///   "startLng": 85.8245
/// }
/// ```
async fn optimize(
    state: web::Data<AppState>,
    req: web::Json<OptimizeRouteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for route request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let selection = state.catalog.select(&req.destination_ids);
    if !selection.missing.is_empty() {
        let missing: Vec<String> = selection.missing.iter().map(ToString::to_string).collect();
        return error_response(
            StatusCode::NOT_FOUND,
            "Unknown destinations",
            format!("Unknown destination ids: {}", missing.join(", ")),
        );
    }

    let start = req.start().unwrap_or(state.default_start);
    let stops = optimize_route(&selection.destinations, Some(start));
    let summary = RouteSummary::from_stops(&stops, state.average_speed_kmh);

    tracing::info!(
        "Routed {} stops ({} unrouted), {:.1} km total",
        summary.routed_stops,
        summary.unrouted_stops,
        summary.total_distance_km
    );

    HttpResponse::Ok().json(RouteResponse { stops, summary })
}

/// GET /api/v1/destinations/nearby?lat=20.29&lng=85.82&radiusKm=50&limit=10
async fn nearby_destinations(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let destinations = find_nearby(
        state.catalog.all(),
        GeoPoint::new(query.lat, query.lng),
        query.radius_km,
        usize::from(query.limit),
    );

    tracing::debug!(
        "Found {} destinations within {} km",
        destinations.len(),
        query.radius_km
    );

    HttpResponse::Ok().json(NearbyResponse { destinations })
}

/// GET /api/v1/cache/stats
async fn cache_stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.cache.stats())
}
