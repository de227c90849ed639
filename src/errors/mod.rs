mod error;
mod mapping;

pub use error::{
    AuthenticationError, ConfigurationError, FineTuneError, FineTuneResult, NetworkError,
    ServerError, ValidationError,
};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
