mod service;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use service::{ChatService, ChatServiceImpl};
pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole,
    Usage,
};
pub use validation::ChatRequestValidator;
