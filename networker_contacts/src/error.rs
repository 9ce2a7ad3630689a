use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Note body is required")]
    EmptyNote,

    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
