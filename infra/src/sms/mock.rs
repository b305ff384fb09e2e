//! Mock SMS gateway
//!
//! Logs messages instead of delivering them and counts sends so tests
//! can assert whether the gateway was invoked at all.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use ajar_core::errors::{DomainError, DomainResult};
use ajar_core::services::verification::SmsGateway;
use ajar_shared::utils::phone::{is_valid_international_phone, mask_phone_number};

/// Mock SMS gateway for development and testing
#[derive(Clone)]
pub struct MockSmsGateway {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate delivery failures
    simulate_failure: bool,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a gateway whose every send fails
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_verification_code(&self, phone: &str, code: &str) -> DomainResult<String> {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(phone),
                "mock gateway simulating delivery failure"
            );
            return Err(DomainError::Delivery {
                message: "simulated SMS delivery failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_gateway",
            provider = "mock",
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            message_number = count,
            code = %code,
            "SMS sent (mock)"
        );

        Ok(message_id)
    }

    fn is_valid_phone_number(&self, phone: &str) -> bool {
        is_valid_international_phone(phone)
    }
}
