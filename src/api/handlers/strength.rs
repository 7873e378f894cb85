// src/api/handlers/strength.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{AnalyzePasswordRequest, AnalyzePasswordResponse};
use crate::generators::strength;

/// Longest password accepted for analysis.
pub const MAX_ANALYSIS_LENGTH: usize = 1000;

/// Analyze password strength
///
/// Computes an entropy estimate and a discrete score for an arbitrary
/// password, with warnings for detected weaknesses and suggestions for
/// improvement. The password is never stored or logged.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = AnalyzePasswordRequest,
    responses(
        (status = 200, description = "Strength report", body = AnalyzePasswordResponse),
        (status = 400, description = "Invalid input", body = AnalyzePasswordResponse)
    )
)]
pub async fn analyze_password(
    analysis_req: web::Json<AnalyzePasswordRequest>,
) -> impl Responder {
    let password = &analysis_req.password;

    if password.is_empty() {
        return HttpResponse::BadRequest().json(AnalyzePasswordResponse {
            success: false,
            score: None,
            entropy_bits: None,
            warnings: Vec::new(),
            suggestions: Vec::new(),
            error: Some("Password must not be empty".to_string()),
        });
    }

    if password.chars().count() > MAX_ANALYSIS_LENGTH {
        return HttpResponse::BadRequest().json(AnalyzePasswordResponse {
            success: false,
            score: None,
            entropy_bits: None,
            warnings: Vec::new(),
            suggestions: Vec::new(),
            error: Some(format!(
                "Password must be at most {MAX_ANALYSIS_LENGTH} characters"
            )),
        });
    }

    match strength::analyze(password) {
        Ok(report) => HttpResponse::Ok().json(AnalyzePasswordResponse {
            success: true,
            score: Some(report.score),
            entropy_bits: Some(report.entropy_bits),
            warnings: report.warnings,
            suggestions: report.suggestions,
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(AnalyzePasswordResponse {
            success: false,
            score: None,
            entropy_bits: None,
            warnings: Vec::new(),
            suggestions: Vec::new(),
            error: Some(e.to_string()),
        }),
    }
}
