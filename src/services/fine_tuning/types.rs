use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineTuningJobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl FineTuningJobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FineTuningJobStatus::Succeeded
                | FineTuningJobStatus::Failed
                | FineTuningJobStatus::Cancelled
        )
    }
}

impl fmt::Display for FineTuningJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FineTuningJobStatus::ValidatingFiles => "validating_files",
            FineTuningJobStatus::Queued => "queued",
            FineTuningJobStatus::Running => "running",
            FineTuningJobStatus::Succeeded => "succeeded",
            FineTuningJobStatus::Failed => "failed",
            FineTuningJobStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FineTuningJobRequest {
    pub model: String,
    pub training_file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FineTuningJobRequest {
    pub fn new(model: impl Into<String>, training_file: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            training_file: training_file.into(),
            validation_file: None,
            hyperparameters: None,
            suffix: None,
        }
    }

    pub fn with_hyperparameters(mut self, hyperparameters: Hyperparameters) -> Self {
        self.hyperparameters = Some(hyperparameters);
        self
    }

    pub fn with_validation_file(mut self, file_id: impl Into<String>) -> Self {
        self.validation_file = Some(file_id.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hyperparameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<HyperparameterValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<HyperparameterValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate_multiplier: Option<HyperparameterValue>,
}

/// A hyperparameter is either the provider-chosen `"auto"` or a number.
/// Whole-number values stay integers on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HyperparameterValue {
    Auto(String),
    Int(u64),
    Number(f64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuningJob {
    pub id: String,
    pub created_at: i64,
    pub finished_at: Option<i64>,
    pub model: String,
    pub fine_tuned_model: Option<String>,
    pub status: FineTuningJobStatus,
    pub training_file: String,

    #[serde(default)]
    pub validation_file: Option<String>,

    #[serde(default)]
    pub hyperparameters: Option<Hyperparameters>,

    #[serde(default)]
    pub result_files: Vec<String>,

    #[serde(default)]
    pub trained_tokens: Option<u64>,

    #[serde(default)]
    pub error: Option<FineTuningJobError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuningJobError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuningEvent {
    pub created_at: i64,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FineTuningEventListResponse {
    pub data: Vec<FineTuningEvent>,

    #[serde(default)]
    pub has_more: bool,
}
