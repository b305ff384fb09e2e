//! SMS gateway implementations
//!
//! - **Mock**: logs messages instead of sending; used in development
//!   and tests
//! - **Twilio**: production delivery via the Twilio API (feature-gated)

pub mod mock;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use mock::MockSmsGateway;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsGateway};
