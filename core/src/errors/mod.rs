//! Error taxonomy for the verification workflow
//!
//! Every failure in the send and verify flows maps to one of these
//! variants; the API layer normalizes them into the uniform
//! `{success: false, error}` response shape.

use thiserror::Error;

/// Domain errors for the verification workflow
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed input. Surfaced as HTTP 400, never retried.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The persistence layer was unavailable or rejected the operation
    #[error("storage error: {message}")]
    Storage { message: String },

    /// The SMS transport failed (auth, quota, invalid destination)
    #[error("delivery error: {message}")]
    Delivery { message: String },

    /// No eligible record matched a verify attempt. The message stays
    /// generic: wrong code, expired code, consumed code, and unknown
    /// phone are indistinguishable to the caller.
    #[error("invalid code")]
    InvalidCode,
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
