use thiserror::Error;

pub type FineTuneResult<T> = Result<T, FineTuneError>;

#[derive(Error, Debug)]
pub enum FineTuneError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after_secs: Option<u64>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: operation timed out")]
    Timeout,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid API key format: {0}")]
    InvalidApiKeyFormat(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

impl FineTuneError {
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, FineTuneError::Authentication(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FineTuneError::Request { status_code, .. } => Some(*status_code),
            FineTuneError::Authentication(_) => Some(401),
            FineTuneError::RateLimit { .. } => Some(429),
            FineTuneError::Server(ServerError::InternalError(_)) => Some(500),
            FineTuneError::Server(ServerError::BadGateway(_)) => Some(502),
            FineTuneError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            FineTuneError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FineTuneError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FineTuneError::Timeout
        } else if err.is_connect() {
            FineTuneError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            FineTuneError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for FineTuneError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            FineTuneError::Deserialization(err.to_string())
        } else {
            FineTuneError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for FineTuneError {
    fn from(err: url::ParseError) -> Self {
        FineTuneError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
