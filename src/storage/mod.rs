pub mod file;
pub mod memory;

use crate::errors::{AppError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A single named location holding the whole serialized contact list.
///
/// `read` returns `None` when nothing was ever written. `write` replaces the
/// entire value in one step; implementations never leave a half-written value
/// behind.
#[async_trait]
pub trait DurableSlot: Send + Sync {
    async fn read(&self) -> Result<Option<Vec<u8>>>;

    async fn write(&self, bytes: &[u8]) -> Result<()>;

    fn get_medium(&self) -> &str;
}

#[async_trait]
impl<T: DurableSlot + ?Sized> DurableSlot for Arc<T> {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read().await
    }

    async fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes).await
    }

    fn get_medium(&self) -> &str {
        (**self).get_medium()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self> {
        match str.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            other => Err(AppError::Config(format!(
                "'{other}' is not a recognized storage medium (expected json or mem)"
            ))),
        }
    }
}

pub fn parse_storage_type(medium: StorageMediums, json_path: &Path) -> Box<dyn DurableSlot> {
    match medium {
        StorageMediums::Json => Box::new(file::FileSlot::new(json_path)),
        StorageMediums::Mem => Box::new(memory::MemorySlot::new()),
    }
}

pub async fn create_file_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !tokio::fs::try_exists(parent).await?
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}

/// Sibling path used while a new value is being written.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_medium_parsing() -> Result<()> {
        assert_eq!(StorageMediums::from("json")?, StorageMediums::Json);
        assert_eq!(StorageMediums::from(" MEM ")?, StorageMediums::Mem);
        assert!(matches!(
            StorageMediums::from("txt"),
            Err(AppError::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn staging_path_sits_next_to_target() {
        let staged = staging_path(Path::new("./.instance/contacts.json"));

        assert_eq!(staged, PathBuf::from("./.instance/contacts.json.tmp"));
    }

    #[test]
    fn factory_picks_backend_by_medium() {
        let path = Path::new("contacts.json");

        assert_eq!(parse_storage_type(StorageMediums::Json, path).get_medium(), "json");
        assert_eq!(parse_storage_type(StorageMediums::Mem, path).get_medium(), "mem");
    }
}
