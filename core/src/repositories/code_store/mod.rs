//! Code store abstraction over the persistence layer holding
//! verification records.

mod memory;

pub use memory::MemoryCodeStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::VerificationRecord;
use crate::errors::DomainResult;

/// Persistence contract for verification records.
///
/// Implementations must keep at most one active record per phone:
/// `put` atomically replaces whatever record the phone currently holds.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Insert or replace the record for `record.phone`
    async fn put(&self, record: &VerificationRecord) -> DomainResult<()>;

    /// Find the record for the phone that is unverified, unexpired at
    /// `now`, and whose code equals the submitted value. `None` covers
    /// wrong code, expired code, consumed code, and unknown phone alike.
    async fn find_active(
        &self,
        phone: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<VerificationRecord>>;

    /// Transition the record to `verified = true`. Idempotent; marking
    /// an already-verified or missing record is not an error.
    async fn mark_verified(&self, id: Uuid) -> DomainResult<()>;
}
