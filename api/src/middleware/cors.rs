//! CORS middleware configuration
//!
//! The verification endpoints are called from the Ajar web app and the
//! mobile shells, so the policy is permissive: any origin may POST, and
//! `OPTIONS` preflights succeed with the cached policy.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates the CORS middleware for the verification API
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}
