pub mod chat;
pub mod files;
pub mod fine_tuning;
