//! Verification service behavior tests

use std::sync::Arc;

use ajar_shared::config::verification::VerificationConfig;

use crate::domain::entities::{VerificationRecord, CODE_LENGTH};
use crate::errors::DomainError;
use crate::repositories::{CodeStore, MemoryCodeStore};
use crate::services::verification::VerificationService;

use super::mocks::{FailingStore, RecordingGateway};

const PHONE: &str = "+966500000000";

fn service(
    gateway: Arc<RecordingGateway>,
    store: Arc<MemoryCodeStore>,
    config: VerificationConfig,
) -> VerificationService<RecordingGateway, MemoryCodeStore> {
    VerificationService::new(gateway, store, config)
}

#[tokio::test]
async fn send_stores_record_and_delivers() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let service = service(gateway.clone(), store.clone(), VerificationConfig::default());

    let outcome = service.send_code(PHONE).await.unwrap();

    assert!(!outcome.is_test_phone);
    assert!(outcome.message_id.is_some());
    assert!(outcome.code.is_none(), "code must not be revealed by default");

    let stored = store.get(PHONE).await.expect("record stored");
    assert_eq!(stored.code.len(), CODE_LENGTH);
    assert_eq!(outcome.expires_at, stored.expires_at);

    let (to, code) = gateway.last_sent().unwrap();
    assert_eq!(to, PHONE);
    assert_eq!(code, stored.code);
}

#[tokio::test]
async fn send_rejects_empty_phone() {
    let service = service(
        Arc::new(RecordingGateway::new()),
        Arc::new(MemoryCodeStore::new()),
        VerificationConfig::default(),
    );

    let error = service.send_code("  ").await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));
}

#[tokio::test]
async fn send_rejects_invalid_phone() {
    let service = service(
        Arc::new(RecordingGateway::new()),
        Arc::new(MemoryCodeStore::new()),
        VerificationConfig::default(),
    );

    let error = service.send_code("12345").await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_phone_bypasses_gateway() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let config = VerificationConfig {
        test_phones: vec![PHONE.to_string()],
        ..Default::default()
    };
    let service = service(gateway.clone(), store.clone(), config);

    let outcome = service.send_code(PHONE).await.unwrap();

    assert!(outcome.is_test_phone);
    assert!(outcome.message_id.is_none());
    assert_eq!(gateway.sent_count(), 0, "gateway must not be invoked");

    let code = outcome.code.expect("test phones receive the code in-band");
    assert_eq!(code, store.get(PHONE).await.unwrap().code);
}

#[tokio::test]
async fn reveal_flag_embeds_code_for_real_sends() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let config = VerificationConfig {
        reveal_code_in_response: true,
        ..Default::default()
    };
    let service = service(gateway.clone(), store.clone(), config);

    let outcome = service.send_code(PHONE).await.unwrap();

    assert!(!outcome.is_test_phone);
    assert_eq!(gateway.sent_count(), 1);
    assert_eq!(outcome.code, Some(store.get(PHONE).await.unwrap().code));
}

#[tokio::test]
async fn delivery_failure_surfaces_as_send_failure() {
    let service = VerificationService::new(
        Arc::new(RecordingGateway::failing()),
        Arc::new(MemoryCodeStore::new()),
        VerificationConfig::default(),
    );

    let error = service.send_code(PHONE).await.unwrap_err();
    assert!(matches!(error, DomainError::Delivery { .. }));
}

#[tokio::test]
async fn storage_failure_surfaces_as_send_failure() {
    let service = VerificationService::new(
        Arc::new(RecordingGateway::new()),
        Arc::new(FailingStore::new()),
        VerificationConfig::default(),
    );

    let error = service.send_code(PHONE).await.unwrap_err();
    assert!(matches!(error, DomainError::Storage { .. }));
}

#[tokio::test]
async fn verify_roundtrip_consumes_record() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let service = service(gateway.clone(), store.clone(), VerificationConfig::default());

    service.send_code(PHONE).await.unwrap();
    let code = store.get(PHONE).await.unwrap().code;

    service.verify_code(PHONE, &code).await.unwrap();
    assert!(store.get(PHONE).await.unwrap().verified);

    // Single-use: the consumed record can never match again
    let error = service.verify_code(PHONE, &code).await.unwrap_err();
    assert!(matches!(error, DomainError::InvalidCode));
}

#[tokio::test]
async fn verify_rejects_wrong_code_generically() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let service = service(gateway.clone(), store.clone(), VerificationConfig::default());

    service.send_code(PHONE).await.unwrap();
    let code = store.get(PHONE).await.unwrap().code;
    let wrong = if code == "123456" { "654321" } else { "123456" };

    let known_phone = service.verify_code(PHONE, wrong).await.unwrap_err();
    let unknown_phone = service
        .verify_code("+966599999999", wrong)
        .await
        .unwrap_err();

    // Identical error either way: probing cannot distinguish a known
    // phone from an unknown one
    assert_eq!(known_phone.to_string(), "invalid code");
    assert_eq!(unknown_phone.to_string(), "invalid code");
}

#[tokio::test]
async fn verify_rejects_expired_code() {
    let store = Arc::new(MemoryCodeStore::new());
    let service = service(
        Arc::new(RecordingGateway::new()),
        store.clone(),
        VerificationConfig::default(),
    );

    let record = VerificationRecord::with_expiration(PHONE.to_string(), -1);
    store.put(&record).await.unwrap();

    let error = service.verify_code(PHONE, &record.code).await.unwrap_err();
    assert!(matches!(error, DomainError::InvalidCode));
}

#[tokio::test]
async fn verify_rejects_missing_input() {
    let service = service(
        Arc::new(RecordingGateway::new()),
        Arc::new(MemoryCodeStore::new()),
        VerificationConfig::default(),
    );

    let error = service.verify_code("", "123456").await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));

    let error = service.verify_code(PHONE, "").await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));
}

#[tokio::test]
async fn resend_supersedes_previous_code() {
    let gateway = Arc::new(RecordingGateway::new());
    let store = Arc::new(MemoryCodeStore::new());
    let service = service(gateway.clone(), store.clone(), VerificationConfig::default());

    service.send_code(PHONE).await.unwrap();
    let first_code = store.get(PHONE).await.unwrap().code;

    service.send_code(PHONE).await.unwrap();
    let second_code = store.get(PHONE).await.unwrap().code;

    if first_code != second_code {
        let error = service.verify_code(PHONE, &first_code).await.unwrap_err();
        assert!(matches!(error, DomainError::InvalidCode));
    }
    service.verify_code(PHONE, &second_code).await.unwrap();
}
