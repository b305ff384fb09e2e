//! In-memory code store for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{CodeStatus, VerificationRecord};
use crate::errors::DomainResult;

use super::CodeStore;

/// Code store backed by a map keyed by phone number.
///
/// Keying by phone gives the insert-or-replace invariant for free: a
/// second send for the same phone supersedes the first record, so only
/// the most recent code can verify.
#[derive(Debug, Default)]
pub struct MemoryCodeStore {
    records: RwLock<HashMap<String, VerificationRecord>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current record for a phone, if any. Test helper.
    pub async fn get(&self, phone: &str) -> Option<VerificationRecord> {
        self.records.read().await.get(phone).cloned()
    }

    /// Number of stored records. Test helper.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put(&self, record: &VerificationRecord) -> DomainResult<()> {
        self.records
            .write()
            .await
            .insert(record.phone.clone(), record.clone());
        Ok(())
    }

    async fn find_active(
        &self,
        phone: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<VerificationRecord>> {
        let records = self.records.read().await;
        let found = records.get(phone).filter(|record| {
            record.status_at(now) == CodeStatus::Pending
                && record.code.len() == code.len()
                && constant_time_eq(record.code.as_bytes(), code.as_bytes())
        });
        Ok(found.cloned())
    }

    async fn mark_verified(&self, id: Uuid) -> DomainResult<()> {
        let mut records = self.records.write().await;
        if let Some(record) = records.values_mut().find(|r| r.id == id) {
            record.mark_verified();
        }
        Ok(())
    }
}
