//! Twilio SMS gateway
//!
//! Production delivery via the Twilio API. Each send is a single
//! outbound call: no retry, no rate limiting, no delivery-status
//! polling. Failures surface verbatim as delivery errors.

use async_trait::async_trait;
use phonenumber::PhoneNumber;
use tracing::{error, info};
use twilio::{Client, OutboundMessage};

use ajar_core::errors::{DomainError, DomainResult};
use ajar_core::services::verification::SmsGateway;
use ajar_shared::utils::phone::mask_phone_number;

use crate::InfraError;

/// Twilio gateway configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number, E.164)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfraError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfraError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER")
            .map_err(|_| InfraError::Config("TWILIO_FROM_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfraError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
        })
    }
}

/// Twilio SMS gateway implementation
pub struct TwilioSmsGateway {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsGateway {
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS gateway initialized"
        );

        Self { client, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        Ok(Self::new(TwilioConfig::from_env()?))
    }
}

#[async_trait]
impl SmsGateway for TwilioSmsGateway {
    async fn send_verification_code(&self, phone: &str, code: &str) -> DomainResult<String> {
        let body = format!("Your Ajar verification code is: {}", code);
        let message = OutboundMessage::new(&self.config.from_number, phone, &body);

        match self.client.send_message(message).await {
            Ok(response) => {
                info!(
                    phone = %mask_phone_number(phone),
                    message_sid = %response.sid,
                    "SMS sent via Twilio"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Twilio send failed"
                );
                Err(DomainError::Delivery {
                    message: format!("Twilio send failed: {}", e),
                })
            }
        }
    }

    fn is_valid_phone_number(&self, phone: &str) -> bool {
        phone.starts_with('+') && phone.parse::<PhoneNumber>().is_ok()
    }
}
