use crate::errors::{FineTuneError, FineTuneResult, ValidationError};
use crate::services::files::FileUploadRequest;

pub struct FileUploadValidator;

impl FileUploadValidator {
    pub fn validate(request: &FileUploadRequest) -> FineTuneResult<()> {
        if request.filename.is_empty() {
            return Err(FineTuneError::Validation(
                ValidationError::MissingRequiredField("filename".to_string()),
            ));
        }

        if request.data.is_empty() {
            return Err(FineTuneError::Validation(ValidationError::InvalidFile(
                "file is empty".to_string(),
            )));
        }

        if !request.filename.ends_with(".jsonl") {
            tracing::warn!(
                filename = %request.filename,
                "uploading a file without a .jsonl extension"
            );
        }

        Ok(())
    }
}
