//! SMS verification workflow: code issuance, delivery, and confirmation

pub mod service;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
pub use traits::SmsGateway;
pub use types::SendCodeOutcome;
