use actix_web::{web, HttpResponse};
use validator::Validate;

use ajar_core::repositories::CodeStore;
use ajar_core::services::verification::SmsGateway;
use ajar_shared::utils::phone::{ensure_plus_prefix, mask_phone_number};

use crate::dto::verification::{ErrorResponse, SendCodeRequest, SendCodeResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /api/v1/verification/send-code
///
/// Issues a verification code for the phone number and delivers it via
/// SMS (or in-band for allow-listed test phones).
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+966500000000" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "verification code sent", "messageId": "SM..." }
/// ```
///
/// For test phones, `isTestPhone` is true and `testCode` carries the
/// code instead of `messageId`.
///
/// ## Errors
/// 400 Bad Request with `{ "success": false, "error": "..." }`
pub async fn send_code<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    S: SmsGateway + 'static,
    R: CodeStore + 'static,
{
    if let Err(errors) = request.validate() {
        log::warn!("send_code validation failed: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new("phone number is required"));
    }

    let phone = ensure_plus_prefix(&request.phone_number);

    log::info!(
        "processing send_code request for {}",
        mask_phone_number(&phone)
    );

    match state.verification_service.send_code(&phone).await {
        Ok(outcome) => {
            let message = if outcome.is_test_phone {
                "test phone, code returned in response"
            } else {
                "verification code sent"
            };

            HttpResponse::Ok().json(SendCodeResponse {
                success: true,
                message: Some(message.to_string()),
                is_test_phone: outcome.is_test_phone.then_some(true),
                test_code: outcome.code,
                message_id: outcome.message_id,
            })
        }
        Err(error) => {
            log::error!(
                "failed to send verification code to {}: {}",
                mask_phone_number(&phone),
                error
            );
            domain_error_response(&error)
        }
    }
}
