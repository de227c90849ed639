mod service;
mod types;
mod validation;


pub use service::{FineTuningService, FineTuningServiceImpl};
pub use types::{
    FineTuningEvent, FineTuningEventListResponse, FineTuningJob, FineTuningJobError,
    FineTuningJobRequest, FineTuningJobStatus, HyperparameterValue, Hyperparameters,
};
pub use validation::FineTuningRequestValidator;
