use actix_web::web;

use crate::error::{json_error_handler, path_error_handler};

pub mod catalog;
pub mod health;
pub mod readings;
pub mod sessions;

/// Register every route plus the body/path error handlers.
///
/// Shared by `main.rs` and the test app builder so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Sessions: /api/sessions/**
    cfg.service(web::scope("/api/sessions").configure(sessions::configure_routes));

    // Catalog and one-shot readings: /api/**
    cfg.service(
        web::scope("/api")
            .configure(catalog::configure_routes)
            .configure(readings::configure_routes),
    );
}
