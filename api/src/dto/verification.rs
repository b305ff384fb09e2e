//! DTOs for the verification endpoints
//!
//! Wire field names are camelCase (`phoneNumber`, `isTestPhone`) to
//! match what the Ajar apps send and expect.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    /// Phone number, E.164 format preferred ("+966500000000")
    #[validate(length(min = 1, max = 16, message = "phone number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    /// Phone number the code was sent to
    #[validate(length(min = 1, max = 16, message = "phone number is required"))]
    pub phone_number: String,

    /// 6-digit verification code
    #[validate(length(equal = 6, message = "code must be 6 digits"))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Present and true when delivery was skipped for an allow-listed
    /// test phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test_phone: Option<bool>,

    /// The code itself, only for test phones or reveal-enabled
    /// environments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_code: Option<String>,

    /// Provider message identifier, for observability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
}

/// Uniform failure shape for both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let request: SendCodeRequest =
            serde_json::from_str(r#"{"phoneNumber": "+966500000000"}"#).unwrap();
        assert_eq!(request.phone_number, "+966500000000");

        let request: VerifyCodeRequest =
            serde_json::from_str(r#"{"phoneNumber": "+966500000000", "code": "123456"}"#)
                .unwrap();
        assert_eq!(request.code, "123456");
    }

    #[test]
    fn test_send_code_request_validation() {
        let request = SendCodeRequest {
            phone_number: String::new(),
        };
        assert!(request.validate().is_err());

        let request = SendCodeRequest {
            phone_number: "+966500000000".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_verify_code_request_validation() {
        let request = VerifyCodeRequest {
            phone_number: "+966500000000".to_string(),
            code: "12345".to_string(), // Too short
        };
        assert!(request.validate().is_err());

        let request = VerifyCodeRequest {
            phone_number: "+966500000000".to_string(),
            code: "1234567".to_string(), // Too long
        };
        assert!(request.validate().is_err());

        let request = VerifyCodeRequest {
            phone_number: "+966500000000".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = SendCodeResponse {
            success: true,
            message: Some("verification code sent".to_string()),
            is_test_phone: None,
            test_code: None,
            message_id: Some("SM123".to_string()),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""messageId":"SM123""#));
        assert!(!json.contains("isTestPhone"));
        assert!(!json.contains("testCode"));
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse::new("invalid code")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"invalid code"}"#);
    }
}
