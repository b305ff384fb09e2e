use actix_web::{web, HttpResponse};
use validator::Validate;

use ajar_core::repositories::CodeStore;
use ajar_core::services::verification::SmsGateway;
use ajar_shared::utils::phone::{ensure_plus_prefix, mask_phone_number};

use crate::dto::verification::{ErrorResponse, VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/verification/verify-code
///
/// Checks a submitted (phone, code) pair against the stored record and
/// consumes the record on success.
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+966500000000", "code": "123456" }
/// ```
///
/// # Response
///
/// 200 OK with `{ "success": true }`, or
/// `{ "success": false, "error": "invalid code" }` when no eligible
/// record matched. The error never says whether the code was wrong,
/// expired, already used, or the phone unknown. 400 Bad Request on
/// malformed input.
pub async fn verify_code<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    S: SmsGateway + 'static,
    R: CodeStore + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("verify_code validation failed: {}", errors);
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("phone number and 6-digit code are required"));
    }

    let phone = ensure_plus_prefix(&request.phone_number);

    match state
        .verification_service
        .verify_code(&phone, &request.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(VerifyCodeResponse { success: true }),
        Err(error) => {
            log::warn!(
                "verification failed for {}: {}",
                mask_phone_number(&phone),
                error
            );
            domain_error_response(&error)
        }
    }
}
