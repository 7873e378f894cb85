// src/api/handlers/passphrase.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::handlers::with_entropy_retry;
use crate::api::types::{GeneratePassphraseRequest, GeneratePassphraseResponse};
use crate::error::EngineError;
use crate::generators::passphrase::{self, MAX_SEPARATOR_LEN, MAX_WORDS, MIN_WORDS};
use crate::generators::sampler::{OsEntropy, SecureSampler};
use crate::generators::wordlist;

/// Generate a passphrase
///
/// Samples words uniformly (with replacement) from the built-in wordlist
/// and joins them with the requested separator.
#[utoipa::path(
    post,
    path = "/generator/passphrase",
    tag = "Generator",
    request_body = GeneratePassphraseRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = GeneratePassphraseResponse),
        (status = 400, description = "Invalid policy", body = GeneratePassphraseResponse),
        (status = 500, description = "Entropy source unavailable", body = GeneratePassphraseResponse)
    )
)]
pub async fn generate_passphrase(
    passphrase_req: web::Json<GeneratePassphraseRequest>,
) -> impl Responder {
    let policy = passphrase_req.to_policy();

    if !(MIN_WORDS..=MAX_WORDS).contains(&policy.word_count) {
        return HttpResponse::BadRequest().json(GeneratePassphraseResponse {
            success: false,
            passphrase: None,
            error: Some(format!(
                "Word count must be between {MIN_WORDS} and {MAX_WORDS}"
            )),
        });
    }

    if policy.separator.chars().count() > MAX_SEPARATOR_LEN {
        return HttpResponse::BadRequest().json(GeneratePassphraseResponse {
            success: false,
            passphrase: None,
            error: Some(format!(
                "Separator must be at most {MAX_SEPARATOR_LEN} characters"
            )),
        });
    }

    let result = with_entropy_retry(|| {
        let mut sampler = SecureSampler::new(OsEntropy);
        passphrase::generate(wordlist::words(), &policy, &mut sampler)
    });

    match result {
        Ok(phrase) => HttpResponse::Ok().json(GeneratePassphraseResponse {
            success: true,
            passphrase: Some(phrase),
            error: None,
        }),
        Err(e @ EngineError::EntropyUnavailable(_)) => {
            HttpResponse::InternalServerError().json(GeneratePassphraseResponse {
                success: false,
                passphrase: None,
                error: Some(e.to_string()),
            })
        }
        Err(e) => HttpResponse::BadRequest().json(GeneratePassphraseResponse {
            success: false,
            passphrase: None,
            error: Some(e.to_string()),
        }),
    }
}
