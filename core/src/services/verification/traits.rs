//! Gateway trait for SMS delivery

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Abstraction over the external SMS-sending provider.
///
/// A single outbound call per send: no retry, no rate limiting, no
/// delivery-status polling. Transport failures surface as
/// `DomainError::Delivery`.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send a verification code to the phone. Returns the provider's
    /// message identifier.
    async fn send_verification_code(&self, phone: &str, code: &str) -> DomainResult<String>;

    /// Whether the phone number is acceptable to this provider
    fn is_valid_phone_number(&self, phone: &str) -> bool;
}
