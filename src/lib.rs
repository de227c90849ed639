pub mod auth;
pub mod client;
pub mod dataset;
pub mod errors;
pub mod pipeline;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use client::{FineTuneClient, FineTuneClientBuilder, FineTuneClientImpl, FineTuneConfig};
pub use errors::{FineTuneError, FineTuneResult};
pub use pipeline::{prepare_training_data, FineTunePipeline, PrepareOutcome, TrainOptions};

pub use services::{
    chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, ChatService},
    files::{FileObject, FilePurpose, FileService, FileUploadRequest},
    fine_tuning::{
        FineTuningJob, FineTuningJobRequest, FineTuningJobStatus, FineTuningService,
        Hyperparameters,
    },
};

pub mod prelude {
    pub use crate::client::{FineTuneClient, FineTuneClientBuilder, FineTuneConfig};
    pub use crate::dataset::TrainingSetValidator;
    pub use crate::errors::{FineTuneError, FineTuneResult};
    pub use crate::pipeline::{prepare_training_data, FineTunePipeline, TrainOptions};
    pub use crate::services::chat::{ChatCompletionRequest, ChatMessage};
    pub use crate::services::files::{FilePurpose, FileUploadRequest};
    pub use crate::services::fine_tuning::{FineTuningJobRequest, FineTuningJobStatus};
}
