//! Result types for the verification service

use chrono::{DateTime, Utc};

/// Result of the send flow
#[derive(Debug, Clone)]
pub struct SendCodeOutcome {
    /// Whether the phone was on the test allow-list and delivery was
    /// skipped
    pub is_test_phone: bool,

    /// The generated code. Present only for test phones or when the
    /// service is configured to reveal codes in the response.
    pub code: Option<String>,

    /// Provider message id; present when the gateway was invoked
    pub message_id: Option<String>,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
}
