use crate::auth::AuthManager;
use crate::client::FineTuneClient;
use crate::services::chat::{ChatService, ChatServiceImpl};
use crate::services::files::{FileService, FileServiceImpl};
use crate::services::fine_tuning::{FineTuningService, FineTuningServiceImpl};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct FineTuneClientImpl {
    files_service: FileServiceImpl,
    fine_tuning_service: FineTuningServiceImpl,
    chat_service: ChatServiceImpl,
}

impl FineTuneClientImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthManager>) -> Self {
        let files_service = FileServiceImpl::new(transport.clone(), auth.clone());
        let fine_tuning_service = FineTuningServiceImpl::new(transport.clone(), auth.clone());
        let chat_service = ChatServiceImpl::new(transport, auth);

        Self {
            files_service,
            fine_tuning_service,
            chat_service,
        }
    }
}

impl FineTuneClient for FineTuneClientImpl {
    fn files(&self) -> &dyn FileService {
        &self.files_service
    }

    fn fine_tuning(&self) -> &dyn FineTuningService {
        &self.fine_tuning_service
    }

    fn chat(&self) -> &dyn ChatService {
        &self.chat_service
    }
}
