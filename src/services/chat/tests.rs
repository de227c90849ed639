//! Unit tests for the chat service

use super::*;
use crate::errors::FineTuneError;
use crate::fixtures;
use crate::mocks::{MockAuthManager, MockTransport};
use http::Method;
use std::sync::Arc;

fn service(transport: MockTransport, auth: MockAuthManager) -> ChatServiceImpl {
    ChatServiceImpl::new(Arc::new(transport), Arc::new(auth))
}

#[tokio::test]
async fn test_create_completion_success() {
    let transport =
        MockTransport::new().with_response(fixtures::chat_completion("A late period can..."));
    let svc = service(transport.clone(), MockAuthManager::new());

    let request = ChatCompletionRequest::new(
        "ft:gpt-3.5-turbo:acme::8abc123",
        vec![
            ChatMessage::system("You are a specialized health assistant."),
            ChatMessage::user("Why is my period late?"),
        ],
    )
    .with_temperature(0.7)
    .with_max_tokens(150);

    let response = svc.create(request).await.unwrap();

    assert_eq!(response.first_content(), Some("A late period can..."));
    assert!(transport.verify_request(Method::POST, "/chat/completions"));

    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["max_tokens"], 150);
}

#[tokio::test]
async fn test_create_rejects_empty_messages_before_any_request() {
    let transport = MockTransport::new();
    let svc = service(transport.clone(), MockAuthManager::new());

    let result = svc
        .create(ChatCompletionRequest::new("gpt-4", vec![]))
        .await;

    assert!(result.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_create_surfaces_provider_error() {
    let transport = MockTransport::new().with_error(FineTuneError::Request {
        status_code: 404,
        message: "model not found".to_string(),
        error_type: Some("invalid_request_error".to_string()),
        error_code: None,
    });
    let svc = service(transport, MockAuthManager::new());

    let result = svc
        .create(ChatCompletionRequest::new(
            "ft:missing",
            vec![ChatMessage::user("hello")],
        ))
        .await;

    match result {
        Err(FineTuneError::Request { status_code, .. }) => assert_eq!(status_code, 404),
        other => panic!("expected request error, got {:?}", other),
    }
}
