//! Verification record entity for SMS phone verification.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code value; keeps every code at exactly six digits
pub const CODE_MIN: u32 = 100_000;

/// Largest code value
pub const CODE_MAX: u32 = 999_999;

/// Default expiration window for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Lifecycle state of a verification record, computed from the stored
/// fields plus the current time rather than inferred ad hoc at each
/// read site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    /// Unverified and unexpired; the only state eligible for verification
    Pending,
    /// Successfully verified. Terminal: the record is consumed and no
    /// further match may succeed against it
    Verified,
    /// Past its expiry window without being verified
    Expired,
}

/// A stored verification code issued to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Normalized phone number the code was issued to (leading `+`)
    pub phone: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub verified: bool,
}

impl VerificationRecord {
    /// Creates a new record with a fresh random code and the default
    /// 10-minute expiry window
    pub fn new(phone: String) -> Self {
        Self::with_expiration(phone, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new record with a fresh random code and a custom
    /// expiry window
    pub fn with_expiration(phone: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            phone,
            code: generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
        }
    }

    /// Computes the record state as of `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> CodeStatus {
        if self.verified {
            CodeStatus::Verified
        } else if now > self.expires_at {
            CodeStatus::Expired
        } else {
            CodeStatus::Pending
        }
    }

    /// Computes the record state as of the current time
    pub fn status(&self) -> CodeStatus {
        self.status_at(Utc::now())
    }

    /// Checks whether the expiry window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Marks the record as verified. Idempotent.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

/// Generates a random 6-digit code, uniform in [100000, 999999], using
/// the OS CSPRNG.
pub fn generate_code() -> String {
    let mut rng = OsRng;
    let code: u32 = rng.gen_range(CODE_MIN..=CODE_MAX);
    code.to_string()
}
