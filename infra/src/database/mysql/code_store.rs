//! MySQL-backed code store
//!
//! One row per phone number: the unique key on `phone` turns every
//! send into an atomic insert-or-replace, so only the most recent code
//! for a phone can verify. Rows are overwritten by the next send and
//! otherwise kept; cleanup of stale rows is operational.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use sqlx::{MySql, Pool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use ajar_core::domain::entities::VerificationRecord;
use ajar_core::errors::{DomainError, DomainResult};
use ajar_core::repositories::CodeStore;
use ajar_shared::utils::phone::mask_phone_number;

/// Code store persisting verification records in MySQL
pub struct MySqlCodeStore {
    /// Database connection pool
    pool: Pool<MySql>,
}

impl MySqlCodeStore {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CodeStore for MySqlCodeStore {
    async fn put(&self, record: &VerificationRecord) -> DomainResult<()> {
        let query = r#"
            INSERT INTO verification_codes (
                id, phone, code, created_at, expires_at, verified
            ) VALUES (?, ?, ?, ?, ?, FALSE)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                code = VALUES(code),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at),
                verified = FALSE
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.phone)
            .bind(&record.code)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(&record.phone),
                    error = %e,
                    "failed to store verification record"
                );
                DomainError::Storage {
                    message: format!("failed to store verification record: {}", e),
                }
            })?;

        debug!(
            phone = %mask_phone_number(&record.phone),
            record_id = %record.id,
            "stored verification record"
        );

        Ok(())
    }

    async fn find_active(
        &self,
        phone: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<VerificationRecord>> {
        let query = r#"
            SELECT id, phone, code, created_at, expires_at, verified
            FROM verification_codes
            WHERE phone = ? AND verified = FALSE AND expires_at > ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(phone)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "failed to look up verification record"
                );
                DomainError::Storage {
                    message: format!("failed to look up verification record: {}", e),
                }
            })?;

        let Some(row) = row else {
            debug!(
                phone = %mask_phone_number(phone),
                "no active verification record"
            );
            return Ok(None);
        };

        let stored_code: String = row.try_get("code").map_err(storage_column_error)?;

        // The comparison happens here rather than in SQL so it runs in
        // constant time over the stored code.
        if stored_code.len() != code.len()
            || !constant_time_eq(stored_code.as_bytes(), code.as_bytes())
        {
            return Ok(None);
        }

        let id: String = row.try_get("id").map_err(storage_column_error)?;
        let id = Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
            message: format!("invalid record id in storage: {}", e),
        })?;

        Ok(Some(VerificationRecord {
            id,
            phone: row.try_get("phone").map_err(storage_column_error)?,
            code: stored_code,
            created_at: row.try_get("created_at").map_err(storage_column_error)?,
            expires_at: row.try_get("expires_at").map_err(storage_column_error)?,
            verified: row.try_get("verified").map_err(storage_column_error)?,
        }))
    }

    async fn mark_verified(&self, id: Uuid) -> DomainResult<()> {
        // Idempotent: re-marking a verified row or targeting a
        // superseded row affects nothing and is not an error.
        sqlx::query("UPDATE verification_codes SET verified = TRUE WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(record_id = %id, error = %e, "failed to mark record verified");
                DomainError::Storage {
                    message: format!("failed to mark record verified: {}", e),
                }
            })?;

        debug!(record_id = %id, "marked verification record as verified");

        Ok(())
    }
}

fn storage_column_error(e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("unexpected row shape: {}", e),
    }
}
