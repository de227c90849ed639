mod service;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use service::{FileService, FileServiceImpl};
pub use types::{FileListResponse, FileObject, FilePurpose, FileUploadRequest};
pub use validation::FileUploadValidator;
