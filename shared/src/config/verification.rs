//! Verification workflow configuration

use serde::{Deserialize, Serialize};

/// Default validity window for verification codes, in minutes
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

/// Configuration for the phone verification workflow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes before a verification code expires
    pub code_expiration_minutes: i64,

    /// Phone numbers that bypass real SMS delivery and receive the code
    /// in the response instead (deterministic testing flows)
    pub test_phones: Vec<String>,

    /// Embed the generated code in every send response. Must stay false
    /// outside controlled test environments: a revealed code defeats
    /// out-of-band delivery.
    pub reveal_code_in_response: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_CODE_TTL_MINUTES,
            test_phones: Vec::new(),
            reveal_code_in_response: false,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    ///
    /// - `VERIFICATION_CODE_TTL_MINUTES`: expiry window (default 10)
    /// - `TEST_PHONE_NUMBERS`: comma-separated allow-list
    /// - `REVEAL_CODE_IN_RESPONSE`: "true"/"1" to enable (default false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let code_expiration_minutes = std::env::var("VERIFICATION_CODE_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_expiration_minutes);
        let test_phones = std::env::var("TEST_PHONE_NUMBERS")
            .map(|v| {
                v.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let reveal_code_in_response = std::env::var("REVEAL_CODE_IN_RESPONSE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            code_expiration_minutes,
            test_phones,
            reveal_code_in_response,
        }
    }

    /// Whether the phone is on the test allow-list
    pub fn is_test_phone(&self, phone: &str) -> bool {
        self.test_phones.iter().any(|p| p == phone)
    }
}
