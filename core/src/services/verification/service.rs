//! Verification service orchestrating the send and verify flows

use std::sync::Arc;

use chrono::Utc;

use ajar_shared::config::verification::VerificationConfig;
use ajar_shared::utils::phone::mask_phone_number;

use crate::domain::entities::VerificationRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CodeStore;

use super::traits::SmsGateway;
use super::types::SendCodeOutcome;

/// Service for issuing and confirming SMS verification codes
pub struct VerificationService<S: SmsGateway, R: CodeStore> {
    /// Gateway for SMS delivery
    gateway: Arc<S>,
    /// Store holding outstanding verification records
    store: Arc<R>,
    /// Workflow configuration
    config: VerificationConfig,
}

impl<S: SmsGateway, R: CodeStore> VerificationService<S, R> {
    pub fn new(gateway: Arc<S>, store: Arc<R>, config: VerificationConfig) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }

    /// Send a verification code to a phone number
    ///
    /// Generates a fresh code, persists it with the configured expiry
    /// window, and delivers it via the gateway. Phones on the test
    /// allow-list skip delivery and receive the code in the outcome
    /// instead.
    pub async fn send_code(&self, phone: &str) -> DomainResult<SendCodeOutcome> {
        if phone.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "phone number is required".to_string(),
            });
        }
        if !self.gateway.is_valid_phone_number(phone) {
            return Err(DomainError::Validation {
                message: format!("invalid phone number format: {}", mask_phone_number(phone)),
            });
        }

        let record = VerificationRecord::with_expiration(
            phone.to_string(),
            self.config.code_expiration_minutes,
        );

        // Replaces any previous record for this phone: only the newest
        // code can verify.
        self.store.put(&record).await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            record_id = %record.id,
            event = "code_issued",
            "stored verification code"
        );

        if self.config.is_test_phone(phone) {
            tracing::info!(
                phone = %mask_phone_number(phone),
                event = "test_phone_bypass",
                "test phone, skipping SMS delivery"
            );
            return Ok(SendCodeOutcome {
                is_test_phone: true,
                code: Some(record.code),
                message_id: None,
                expires_at: record.expires_at,
            });
        }

        let message_id = self
            .gateway
            .send_verification_code(phone, &record.code)
            .await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            event = "code_sent",
            "verification code sent"
        );

        let code = if self.config.reveal_code_in_response {
            Some(record.code)
        } else {
            None
        };

        Ok(SendCodeOutcome {
            is_test_phone: false,
            code,
            message_id: Some(message_id),
            expires_at: record.expires_at,
        })
    }

    /// Verify a submitted (phone, code) pair
    ///
    /// Succeeds only against a pending record with a matching code, and
    /// consumes the record so a second attempt fails. Every ineligible
    /// lookup fails with the same generic `InvalidCode`.
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        if phone.trim().is_empty() || code.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "phone number and code are required".to_string(),
            });
        }

        let now = Utc::now();
        match self.store.find_active(phone, code, now).await? {
            Some(record) => {
                self.store.mark_verified(record.id).await?;
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    record_id = %record.id,
                    event = "code_verified",
                    "verification code confirmed"
                );
                Ok(())
            }
            None => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    event = "code_rejected",
                    "verification attempt rejected"
                );
                Err(DomainError::InvalidCode)
            }
        }
    }
}
