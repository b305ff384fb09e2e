//! Verification endpoints: send-code and verify-code

mod send_code;
mod verify_code;

pub use send_code::send_code;
pub use verify_code::verify_code;

use std::sync::Arc;

use actix_web::web;

use ajar_core::repositories::CodeStore;
use ajar_core::services::verification::{SmsGateway, VerificationService};

/// Application state holding the shared verification service
pub struct AppState<S: SmsGateway, R: CodeStore> {
    pub verification_service: Arc<VerificationService<S, R>>,
}

/// Mount the verification routes under `/api/v1/verification`
pub fn configure<S, R>(cfg: &mut web::ServiceConfig)
where
    S: SmsGateway + 'static,
    R: CodeStore + 'static,
{
    cfg.service(
        web::scope("/api/v1/verification")
            .route("/send-code", web::post().to(send_code::<S, R>))
            .route("/verify-code", web::post().to(verify_code::<S, R>)),
    );
}
