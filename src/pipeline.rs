//! Sequencing layer: ties the dataset validator and the provider services
//! into the five pipeline operations (prepare, upload, train, status, test).

use crate::client::FineTuneClient;
use crate::dataset::{jsonl, TrainingSetValidator};
use crate::errors::FineTuneResult;
use crate::services::chat::{ChatCompletionRequest, ChatMessage};
use crate::services::files::{FileObject, FilePurpose, FileUploadRequest};
use crate::services::fine_tuning::{
    FineTuningEvent, FineTuningJob, FineTuningJobRequest, HyperparameterValue, Hyperparameters,
};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_BASE_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_EPOCHS: u64 = 3;
pub const DEFAULT_BATCH_SIZE: u64 = 1;
pub const DEFAULT_LEARNING_RATE_MULTIPLIER: f64 = 0.1;

const TEST_TEMPERATURE: f32 = 0.7;
const TEST_MAX_TOKENS: u32 = 150;

/// Result of a prepare run: how many records came in, how many survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareOutcome {
    pub read: usize,
    pub kept: usize,
}

/// Job creation options. Defaults mirror a conservative first run on a
/// small conversational dataset.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub model: String,
    pub n_epochs: u64,
    pub batch_size: u64,
    pub learning_rate_multiplier: f64,
    pub suffix: Option<String>,
    pub validation_file: Option<String>,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_BASE_MODEL.to_string(),
            n_epochs: DEFAULT_EPOCHS,
            batch_size: DEFAULT_BATCH_SIZE,
            learning_rate_multiplier: DEFAULT_LEARNING_RATE_MULTIPLIER,
            suffix: None,
            validation_file: None,
        }
    }
}

/// One question/answer pair from a post-training test run.
#[derive(Debug, Clone)]
pub struct ModelAnswer {
    pub question: String,
    pub answer: Option<String>,
}

pub struct FineTunePipeline {
    client: Arc<dyn FineTuneClient>,
}

/// Reads raw training records, keeps the well-formed examples, and writes
/// them to `output`. Malformed records are dropped silently; only the
/// survivor count is reported back. Purely local: no client involved.
pub fn prepare_training_data(input: &Path, output: &Path) -> FineTuneResult<PrepareOutcome> {
    let records = jsonl::read_records(input)?;
    let read = records.len();

    let cleaned = TrainingSetValidator::clean(records);
    let kept = cleaned.len();

    jsonl::write_records(output, &cleaned)?;
    tracing::info!(read, kept, output = %output.display(), "prepared training data");

    Ok(PrepareOutcome { read, kept })
}

impl FineTunePipeline {
    pub fn new(client: Arc<dyn FineTuneClient>) -> Self {
        Self { client }
    }

    /// Uploads a prepared training file and returns the provider's file
    /// record.
    pub async fn upload(&self, path: &Path) -> FineTuneResult<FileObject> {
        let data = Bytes::from(std::fs::read(path)?);
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "training.jsonl".to_string());

        let request = FileUploadRequest::new(data, filename, FilePurpose::FineTune);
        let file = self.client.files().upload(request).await?;

        tracing::info!(file_id = %file.id, bytes = file.bytes, "training file uploaded");
        Ok(file)
    }

    /// Creates a fine-tuning job for an uploaded file.
    pub async fn train(&self, file_id: &str, options: TrainOptions) -> FineTuneResult<FineTuningJob> {
        let hyperparameters = Hyperparameters {
            n_epochs: Some(HyperparameterValue::Int(options.n_epochs)),
            batch_size: Some(HyperparameterValue::Int(options.batch_size)),
            learning_rate_multiplier: Some(HyperparameterValue::Number(
                options.learning_rate_multiplier,
            )),
        };

        let mut request = FineTuningJobRequest::new(options.model, file_id)
            .with_hyperparameters(hyperparameters);
        if let Some(suffix) = options.suffix {
            request = request.with_suffix(suffix);
        }
        if let Some(validation_file) = options.validation_file {
            request = request.with_validation_file(validation_file);
        }

        let job = self.client.fine_tuning().create(request).await?;
        tracing::info!(job_id = %job.id, model = %job.model, "fine-tuning job created");
        Ok(job)
    }

    /// Retrieves the current state of a fine-tuning job.
    pub async fn status(&self, job_id: &str) -> FineTuneResult<FineTuningJob> {
        self.client.fine_tuning().retrieve(job_id).await
    }

    /// Lists recent events for a job, oldest first as the provider
    /// returns them.
    pub async fn events(&self, job_id: &str) -> FineTuneResult<Vec<FineTuningEvent>> {
        let response = self.client.fine_tuning().events(job_id, None, None).await?;
        Ok(response.data)
    }

    /// Sends each question to the fine-tuned model and collects the
    /// answers. A failed call aborts the remaining questions.
    pub async fn test(
        &self,
        model_id: &str,
        system_prompt: &str,
        questions: &[String],
    ) -> FineTuneResult<Vec<ModelAnswer>> {
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            let request = ChatCompletionRequest::new(
                model_id,
                vec![
                    ChatMessage::system(system_prompt),
                    ChatMessage::user(question),
                ],
            )
            .with_temperature(TEST_TEMPERATURE)
            .with_max_tokens(TEST_MAX_TOKENS);

            let response = self.client.chat().create(request).await?;
            answers.push(ModelAnswer {
                question: question.clone(),
                answer: response.first_content().map(str::to_string),
            });
        }

        Ok(answers)
    }
}

/// Default output path for a prepare run: `training.jsonl` becomes
/// `training_cleaned.jsonl`.
pub fn default_cleaned_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "training".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jsonl".to_string());

    input.with_file_name(format!("{}_cleaned.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_counts_and_filters() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("training.jsonl");
        let output = dir.path().join("training_cleaned.jsonl");

        let records = vec![
            json!({"messages": [
                {"role": "user", "content": "Why is my period late?"},
                {"role": "assistant", "content": "A late period can have many causes..."}
            ]}),
            json!({"messages": [{"role": "user", "content": "hi"}]}),
            json!({"foo": "bar"}),
        ];
        jsonl::write_records(&input, &records).unwrap();

        let outcome = prepare_training_data(&input, &output).unwrap();
        assert_eq!(outcome, PrepareOutcome { read: 3, kept: 1 });

        let written = jsonl::read_records(&output).unwrap();
        assert_eq!(written, vec![records[0].clone()]);
    }

    #[test]
    fn test_default_cleaned_path() {
        assert_eq!(
            default_cleaned_path(Path::new("data/training.jsonl")),
            PathBuf::from("data/training_cleaned.jsonl")
        );
    }

    #[test]
    fn test_default_train_options() {
        let options = TrainOptions::default();
        assert_eq!(options.model, "gpt-3.5-turbo");
        assert_eq!(options.n_epochs, 3);
        assert_eq!(options.batch_size, 1);
        assert_eq!(options.learning_rate_multiplier, 0.1);
    }
}
