//! HTTP client wrapper for the Ajar verification API.
//!
//! The wrapper never surfaces transport details to callers: every
//! failure mode (connection refused, non-2xx status, unparsable body)
//! folds into a plain [`VerificationOutcome`] so calling code branches
//! on `success` alone.

use serde::{Deserialize, Serialize};
use tracing::warn;

use ajar_shared::utils::phone::{ensure_plus_prefix, mask_phone_number};

const SEND_CODE_PATH: &str = "/api/v1/verification/send-code";
const VERIFY_CODE_PATH: &str = "/api/v1/verification/verify-code";

/// Result of a send or verify call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl VerificationOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeBody<'a> {
    phone_number: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyCodeBody<'a> {
    phone_number: &'a str,
    code: &'a str,
}

/// Minimal view of the API response. Extra fields (`messageId`,
/// `testCode`, ...) are ignored so the client stays compatible as the
/// server grows its payload.
#[derive(Deserialize)]
struct ApiResult {
    success: bool,
    error: Option<String>,
}

/// Client for the verification endpoints.
#[derive(Debug, Clone)]
pub struct VerificationClient {
    http: reqwest::Client,
    base_url: String,
}

impl VerificationClient {
    /// Create a client against the given base URL, e.g.
    /// `http://localhost:8080`. A trailing slash is trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Request a verification code for the phone number.
    ///
    /// The phone is normalized to its `+`-prefixed form before sending,
    /// so callers may pass either `966...` or `+966...`.
    pub async fn send_verification_code(&self, phone: &str) -> VerificationOutcome {
        let phone = ensure_plus_prefix(phone);
        self.post(SEND_CODE_PATH, &SendCodeBody { phone_number: &phone })
            .await
    }

    /// Submit a code for verification.
    pub async fn verify_code(&self, phone: &str, code: &str) -> VerificationOutcome {
        let phone = ensure_plus_prefix(phone);
        self.post(
            VERIFY_CODE_PATH,
            &VerifyCodeBody {
                phone_number: &phone,
                code,
            },
        )
        .await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> VerificationOutcome {
        let url = format!("{}{}", self.base_url, path);

        let response = match self.http.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, "request failed: {}", e);
                return VerificationOutcome::failed("verification service unreachable");
            }
        };

        let status = response.status();
        match response.json::<ApiResult>().await {
            Ok(result) if result.success => VerificationOutcome::ok(),
            Ok(result) => VerificationOutcome::failed(
                result.error.unwrap_or_else(|| "verification failed".to_string()),
            ),
            Err(e) => {
                warn!(url = %url, status = %status, "unparsable response body: {}", e);
                VerificationOutcome::failed(format!(
                    "unexpected response from verification service ({})",
                    status
                ))
            }
        }
    }
}

/// Mask a phone number for client-side logging.
///
/// Re-exported so application code logging around the client does not
/// need a direct `ajar_shared` dependency.
pub fn mask_phone(phone: &str) -> String {
    mask_phone_number(phone)
}
