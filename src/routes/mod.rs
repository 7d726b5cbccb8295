// Route exports
pub mod destinations;

use actix_web::web;

pub use destinations::{AppState, Limits};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(destinations::configure),
    );
}
