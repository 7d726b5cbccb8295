//! Yatra Algo - destination recommendations and route ordering for the Odisha travel guide
//!
//! This library scores catalog destinations against traveller preferences,
//! orders a set of destinations into a greedy nearest-neighbour route, and
//! finds destinations near a coordinate. All of it is pure, synchronous
//! computation over an in-memory catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, optimize_route, find_nearby, distance::haversine_distance};
pub use models::{Destination, DestinationId, Preferences, ScoredDestination, RouteStop, ScoringWeights, GeoPoint};
pub use services::Catalog;
