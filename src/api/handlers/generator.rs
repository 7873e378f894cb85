// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::handlers::with_entropy_retry;
use crate::api::types::{
    GenerateBatchRequest, GenerateBatchResponse, GeneratePasswordRequest,
    GeneratePasswordResponse,
};
use crate::error::EngineError;
use crate::generators::charset;
use crate::generators::password::{self, MAX_BATCH_SIZE};
use crate::generators::sampler::{OsEntropy, SecureSampler};
use crate::models::GenerationPolicy;

/// Length bounds accepted over the API.
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

const DEFAULT_BATCH_COUNT: usize = 5;

fn validate_policy(policy: &GenerationPolicy) -> Option<String> {
    if policy.length < MIN_LENGTH {
        return Some(format!(
            "Password length must be at least {MIN_LENGTH} characters"
        ));
    }
    if policy.length > MAX_LENGTH {
        return Some(format!(
            "Password length must be at most {MAX_LENGTH} characters"
        ));
    }
    if !policy.include_uppercase
        && !policy.include_lowercase
        && !policy.include_numbers
        && !policy.include_symbols
    {
        return Some("At least one character type must be included".to_string());
    }
    None
}

/// Generate a secure password
///
/// Generates a single password under the requested character-set policy.
/// Every selected category is guaranteed at least one character.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GeneratePasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = GeneratePasswordResponse),
        (status = 400, description = "Invalid policy", body = GeneratePasswordResponse),
        (status = 500, description = "Entropy source unavailable", body = GeneratePasswordResponse)
    )
)]
pub async fn generate_password(
    generation_req: web::Json<GeneratePasswordRequest>,
) -> impl Responder {
    let policy = generation_req.to_policy();

    if let Some(message) = validate_policy(&policy) {
        return HttpResponse::BadRequest().json(GeneratePasswordResponse {
            success: false,
            password: None,
            error: Some(message),
        });
    }

    let result = with_entropy_retry(|| {
        let pool = charset::build(&policy)?;
        let mut sampler = SecureSampler::new(OsEntropy);
        password::generate(&pool, policy.length, true, &mut sampler)
    });

    match result {
        Ok(password) => HttpResponse::Ok().json(GeneratePasswordResponse {
            success: true,
            password: Some(password),
            error: None,
        }),
        Err(e @ EngineError::EntropyUnavailable(_)) => {
            HttpResponse::InternalServerError().json(GeneratePasswordResponse {
                success: false,
                password: None,
                error: Some(e.to_string()),
            })
        }
        Err(e) => HttpResponse::BadRequest().json(GeneratePasswordResponse {
            success: false,
            password: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Generate a batch of passwords
///
/// Generates up to 20 independent passwords under one policy. The response
/// order matches the request order.
#[utoipa::path(
    post,
    path = "/generator/batch",
    tag = "Generator",
    request_body = GenerateBatchRequest,
    responses(
        (status = 200, description = "Generated passwords", body = GenerateBatchResponse),
        (status = 400, description = "Invalid policy", body = GenerateBatchResponse),
        (status = 500, description = "Entropy source unavailable", body = GenerateBatchResponse)
    )
)]
pub async fn generate_batch(batch_req: web::Json<GenerateBatchRequest>) -> impl Responder {
    let policy = batch_req.to_policy();
    let count = batch_req.count.unwrap_or(DEFAULT_BATCH_COUNT);

    if let Some(message) = validate_policy(&policy) {
        return HttpResponse::BadRequest().json(GenerateBatchResponse {
            success: false,
            passwords: Vec::new(),
            error: Some(message),
        });
    }

    if count == 0 || count > MAX_BATCH_SIZE {
        return HttpResponse::BadRequest().json(GenerateBatchResponse {
            success: false,
            passwords: Vec::new(),
            error: Some(format!("Count must be between 1 and {MAX_BATCH_SIZE}")),
        });
    }

    let result = with_entropy_retry(|| {
        let pool = charset::build(&policy)?;
        let mut sampler = SecureSampler::new(OsEntropy);
        password::generate_batch(&pool, policy.length, true, count, &mut sampler)
    });

    match result {
        Ok(passwords) => HttpResponse::Ok().json(GenerateBatchResponse {
            success: true,
            passwords,
            error: None,
        }),
        Err(e @ EngineError::EntropyUnavailable(_)) => {
            HttpResponse::InternalServerError().json(GenerateBatchResponse {
                success: false,
                passwords: Vec::new(),
                error: Some(e.to_string()),
            })
        }
        Err(e) => HttpResponse::BadRequest().json(GenerateBatchResponse {
            success: false,
            passwords: Vec::new(),
            error: Some(e.to_string()),
        }),
    }
}
