//! Canned provider responses shared by the service unit tests.

use serde_json::{json, Value};

pub fn file_object() -> Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "bytes": 2048,
        "created_at": 1699061776,
        "filename": "training_cleaned.jsonl",
        "purpose": "fine-tune",
        "status": "processed"
    })
}

pub fn file_list() -> Value {
    json!({
        "object": "list",
        "data": [
            file_object(),
            {
                "id": "file-def456",
                "object": "file",
                "bytes": 512,
                "created_at": 1699061900,
                "filename": "validation.jsonl",
                "purpose": "fine-tune"
            }
        ]
    })
}

pub fn fine_tuning_job(status: &str) -> Value {
    let fine_tuned_model = if status == "succeeded" {
        json!("ft:gpt-3.5-turbo:acme::8abc123")
    } else {
        Value::Null
    };

    json!({
        "id": "ftjob-xyz789",
        "object": "fine_tuning.job",
        "created_at": 1699062000,
        "finished_at": null,
        "model": "gpt-3.5-turbo",
        "fine_tuned_model": fine_tuned_model,
        "status": status,
        "hyperparameters": {
            "n_epochs": 3,
            "batch_size": 1,
            "learning_rate_multiplier": 0.1
        },
        "training_file": "file-abc123",
        "validation_file": null,
        "result_files": [],
        "trained_tokens": null,
        "error": null
    })
}

pub fn fine_tuning_events() -> Value {
    json!({
        "object": "list",
        "data": [
            {
                "id": "ftevent-001",
                "object": "fine_tuning.job.event",
                "created_at": 1699062010,
                "level": "info",
                "message": "Validating training file: file-abc123"
            },
            {
                "id": "ftevent-002",
                "object": "fine_tuning.job.event",
                "created_at": 1699062100,
                "level": "info",
                "message": "Fine-tuning job started"
            }
        ],
        "has_more": false
    })
}

pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1699062500,
        "model": "ft:gpt-3.5-turbo:acme::8abc123",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 25,
            "completion_tokens": 40,
            "total_tokens": 65
        }
    })
}
