// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::{CharacterSetsResponse, HealthResponse};
use crate::generators::{charset, wordlist};

/// List the engine's character sets
///
/// Read-only introspection of the category definitions used for password
/// generation, including the confusable set removed by exclude_similar.
#[utoipa::path(
    get,
    path = "/generator/charsets",
    tag = "System",
    responses(
        (status = 200, description = "Character set definitions", body = CharacterSetsResponse)
    )
)]
pub async fn get_character_sets() -> impl Responder {
    HttpResponse::Ok().json(CharacterSetsResponse {
        success: true,
        charsets: Some(charset::character_sets()),
        error: None,
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        wordlist_size: wordlist::len(),
    })
}
