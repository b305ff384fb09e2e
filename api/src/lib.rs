//! HTTP layer for the Ajar verification backend
//!
//! Exposes the send-code and verify-code endpoints, request/response
//! DTOs, CORS configuration, and the domain-error-to-HTTP mapping.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
