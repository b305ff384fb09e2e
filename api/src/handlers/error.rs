//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use ajar_core::errors::DomainError;

use crate::dto::verification::ErrorResponse;

/// Map a domain error to the uniform `{success: false, error}` shape.
///
/// `InvalidCode` stays on the 200 path: a rejected verify attempt is an
/// ordinary unsuccessful result, not a transport failure. Storage and
/// delivery details are logged at the call site and replaced with
/// generic messages here so internals never reach the wire.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::InvalidCode => HttpResponse::Ok().json(ErrorResponse::new("invalid code")),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone()))
        }
        DomainError::Storage { .. } => HttpResponse::BadRequest().json(ErrorResponse::new(
            "failed to process verification request",
        )),
        DomainError::Delivery { .. } => HttpResponse::BadRequest().json(ErrorResponse::new(
            "failed to send verification code",
        )),
    }
}
