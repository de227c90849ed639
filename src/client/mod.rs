mod client_impl;
mod config;
mod factory;

pub use client_impl::FineTuneClientImpl;
pub use config::FineTuneConfig;
pub use factory::FineTuneClientBuilder;

use crate::services::chat::ChatService;
use crate::services::files::FileService;
use crate::services::fine_tuning::FineTuningService;

/// Entry point to the provider's fine-tuning surface: files, jobs, and
/// chat completions for post-training testing.
pub trait FineTuneClient: Send + Sync {
    fn files(&self) -> &dyn FileService;
    fn fine_tuning(&self) -> &dyn FineTuningService;
    fn chat(&self) -> &dyn ChatService;
}
