// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod nearby;
pub mod recommender;
pub mod router;
pub mod scoring;
pub mod tables;

pub use distance::{haversine_distance, distance_between, calculate_bounding_box, is_within_bounding_box};
pub use filters::{interest_fraction, crowd_fit, seasonal_fit, companion_fit};
pub use nearby::find_nearby;
pub use recommender::{Recommender, DEFAULT_LIMIT};
pub use router::{optimize_route, total_distance, DEFAULT_START};
pub use scoring::{calculate_match_score, score_breakdown, score_from_breakdown};
