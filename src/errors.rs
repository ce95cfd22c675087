use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The durable slot could not be read.
    #[error("Failed to read contact storage: {0}")]
    StorageRead(#[source] std::io::Error),

    /// The durable slot holds data that does not decode into a contact list.
    #[error("Contact storage is corrupt: {0}")]
    StorageCorrupt(String),

    /// The durable slot could not be written, or the collection could not be encoded.
    #[error("Failed to write contact storage: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for every failure that happened while hydrating from the slot.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, AppError::StorageRead(_) | AppError::StorageCorrupt(_))
    }

    pub fn is_write_failure(&self) -> bool {
        matches!(self, AppError::StorageWrite(_))
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
