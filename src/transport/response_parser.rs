use crate::errors::{ApiErrorResponse, ErrorMapper, FineTuneError, FineTuneResult};
use reqwest::Response;
use serde_json::Value;

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a provider response, mapping non-success statuses through
    /// the error mapper.
    pub async fn parse_response(response: Response) -> FineTuneResult<Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                FineTuneError::Deserialization(format!(
                    "Failed to deserialize response: {}. Body: {}",
                    e,
                    String::from_utf8_lossy(&body)
                ))
            })
        } else {
            let headers = response.headers().clone();
            let error_response: Option<ApiErrorResponse> = response.json().await.ok();

            Err(ErrorMapper::map_status_with_headers(
                status.as_u16(),
                &headers,
                error_response,
            ))
        }
    }

    pub fn parse_json(data: &[u8]) -> FineTuneResult<Value> {
        serde_json::from_slice(data).map_err(|e| {
            FineTuneError::Deserialization(format!(
                "Failed to deserialize JSON: {}. Data: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let json = br#"{"message": "hello"}"#;
        let result = ResponseParser::parse_json(json);
        assert!(result.is_ok());
        assert_eq!(result.unwrap()["message"], "hello");
    }

    #[test]
    fn test_parse_json_error() {
        let json = b"not json";
        let result = ResponseParser::parse_json(json);
        assert!(matches!(result, Err(FineTuneError::Deserialization(_))));
    }
}
