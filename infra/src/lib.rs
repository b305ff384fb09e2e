//! # Infrastructure Layer
//!
//! Concrete implementations behind the core abstractions:
//! - **Database**: MySQL code store using SQLx
//! - **SMS**: Twilio gateway for production delivery, mock gateway for
//!   development and tests
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS gateway (default)

pub mod database;
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
