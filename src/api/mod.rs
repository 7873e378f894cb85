// src/api/mod.rs
use actix_web::{App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_batch,
        crate::api::handlers::passphrase::generate_passphrase,
        crate::api::handlers::strength::analyze_password,

        // System endpoints
        crate::api::handlers::system::get_character_sets,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::GenerateBatchRequest,
            crate::api::types::GenerateBatchResponse,
            crate::api::types::GeneratePassphraseRequest,
            crate::api::types::GeneratePassphraseResponse,
            crate::api::types::AnalyzePasswordRequest,
            crate::api::types::AnalyzePasswordResponse,
            crate::api::types::CharacterSetsResponse,
            crate::api::types::HealthResponse,

            // Domain models
            crate::models::GenerationPolicy,
            crate::models::PassphrasePolicy,
            crate::models::WordCasing,
            crate::models::StrengthScore,
            crate::models::StrengthReport,
            crate::models::CharacterSets
        )
    ),
    tags(
        (name = "Generator", description = "Password and passphrase generation endpoints"),
        (name = "System", description = "Introspection and service status")
    ),
    info(
        title = "PassForge API",
        version = "0.1.0",
        description = "Password generation and strength analysis service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    log::info!(
        "Starting PassForge API server on {}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
