// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/batch", web::post().to(handlers::generator::generate_batch))
            .route("/passphrase", web::post().to(handlers::passphrase::generate_passphrase))
            .route("/analysis", web::post().to(handlers::strength::analyze_password))
            .route("/charsets", web::get().to(handlers::system::get_character_sets)),
    );

    // Service status
    cfg.route("/health", web::get().to(handlers::system::health));
}
