use crate::errors::{AuthenticationError, FineTuneError, ServerError, ValidationError};
use serde::{Deserialize, Serialize};

/// Error envelope returned by the provider API.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional error envelope to a FineTuneError.
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<ApiErrorResponse>,
    ) -> FineTuneError {
        let detail = error_response.map(|r| r.error);
        let message = detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            400 => FineTuneError::Validation(ValidationError::InvalidRequest(message)),
            401 => FineTuneError::Authentication(AuthenticationError::InvalidApiKey(message)),
            403 => {
                if message.contains("permission") {
                    FineTuneError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    FineTuneError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => FineTuneError::RateLimit {
                message,
                retry_after_secs: None,
            },
            500 => FineTuneError::Server(ServerError::InternalError(message)),
            502 => FineTuneError::Server(ServerError::BadGateway(message)),
            503 => FineTuneError::Server(ServerError::ServiceUnavailable(message)),
            504 => FineTuneError::Server(ServerError::GatewayTimeout(message)),
            _ => FineTuneError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Maps a status code, attaching retry-after information for rate limits.
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        error_response: Option<ApiErrorResponse>,
    ) -> FineTuneError {
        let mut error = Self::map_status_code(status_code, error_response);

        if let FineTuneError::RateLimit {
            ref mut retry_after_secs,
            ..
        } = error
        {
            *retry_after_secs = Self::extract_retry_after(headers);
        }

        error
    }

    /// Extracts the retry-after header value in seconds.
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }
}
