use crate::errors::{FineTuneError, FineTuneResult, ValidationError};
use crate::services::fine_tuning::{FineTuningJobRequest, HyperparameterValue};

pub struct FineTuningRequestValidator;

impl FineTuningRequestValidator {
    pub fn validate(request: &FineTuningJobRequest) -> FineTuneResult<()> {
        if request.training_file.is_empty() {
            return Err(FineTuneError::Validation(
                ValidationError::MissingRequiredField("training_file".to_string()),
            ));
        }

        if request.model.is_empty() {
            return Err(FineTuneError::Validation(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        if let Some(hp) = &request.hyperparameters {
            if let Some(HyperparameterValue::Int(0)) = hp.n_epochs {
                return Err(FineTuneError::Validation(ValidationError::ValueOutOfRange {
                    field: "n_epochs".to_string(),
                    min: "1".to_string(),
                    max: "50".to_string(),
                    value: "0".to_string(),
                }));
            }

            if let Some(HyperparameterValue::Number(lr)) = hp.learning_rate_multiplier {
                if lr <= 0.0 {
                    return Err(FineTuneError::Validation(ValidationError::ValueOutOfRange {
                        field: "learning_rate_multiplier".to_string(),
                        min: "0.0".to_string(),
                        max: "unbounded".to_string(),
                        value: lr.to_string(),
                    }));
                }
            }
        }

        Ok(())
    }
}
