//! Unit tests for the file service

use super::*;
use crate::fixtures;
use crate::mocks::{MockAuthManager, MockTransport};
use bytes::Bytes;
use http::Method;
use std::sync::Arc;

fn service(transport: MockTransport, auth: MockAuthManager) -> FileServiceImpl {
    FileServiceImpl::new(Arc::new(transport), Arc::new(auth))
}

#[tokio::test]
async fn test_upload_success() {
    let transport = MockTransport::new().with_upload_response(fixtures::file_object());
    let svc = service(transport.clone(), MockAuthManager::new());

    let request = FileUploadRequest::new(
        Bytes::from("{\"messages\":[]}\n"),
        "training_cleaned.jsonl",
        FilePurpose::FineTune,
    );

    let file = svc.upload(request).await.unwrap();

    assert_eq!(file.id, "file-abc123");
    assert_eq!(transport.request_count(), 1);

    // purpose travels as a multipart field, not JSON
    let recorded = &transport.requests()[0];
    let fields = recorded.body.as_ref().unwrap()["fields"].to_string();
    assert!(fields.contains("fine-tune"));
}

#[tokio::test]
async fn test_upload_rejects_empty_file_before_any_request() {
    let transport = MockTransport::new();
    let svc = service(transport.clone(), MockAuthManager::new());

    let request = FileUploadRequest::new(Bytes::new(), "training.jsonl", FilePurpose::FineTune);
    let result = svc.upload(request).await;

    assert!(result.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_retrieve_success() {
    let transport = MockTransport::new().with_response(fixtures::file_object());
    let svc = service(transport.clone(), MockAuthManager::new());

    let file = svc.retrieve("file-abc123").await.unwrap();

    assert_eq!(file.filename, "training_cleaned.jsonl");
    assert!(transport.verify_request(Method::GET, "/files/file-abc123"));
}

#[tokio::test]
async fn test_list_success() {
    let transport = MockTransport::new().with_response(fixtures::file_list());
    let svc = service(transport.clone(), MockAuthManager::new());

    let response = svc.list().await.unwrap();

    assert_eq!(response.data.len(), 2);
    assert!(transport.verify_request(Method::GET, "/files"));
}

#[tokio::test]
async fn test_upload_authentication_error() {
    let transport = MockTransport::new();
    let svc = service(transport, MockAuthManager::with_error("Invalid API key"));

    let request = FileUploadRequest::new(
        Bytes::from("{}"),
        "training.jsonl",
        FilePurpose::FineTune,
    );

    let result = svc.upload(request).await;
    assert!(result.unwrap_err().is_authentication_error());
}
