use super::*;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Slot backed by one JSON file.
///
/// Writes land in a sibling `.tmp` file which is synced and then renamed over
/// the target, so readers only ever see the old or the new whole value.
#[derive(Debug, Clone)]
pub struct FileSlot {
    pub medium: String,
    pub path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    async fn write_staged(&self, staged: &Path, bytes: &[u8]) -> std::io::Result<()> {
        create_file_parent(&self.path).await?;

        let mut file = fs::File::create(staged).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(staged, &self.path).await
    }
}

#[async_trait]
impl DurableSlot for FileSlot {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::StorageRead(err)),
        }
    }

    async fn write(&self, bytes: &[u8]) -> Result<()> {
        let staged = staging_path(&self.path);

        if let Err(err) = self.write_staged(&staged, bytes).await {
            // The target still holds the previous value; only the staging file may linger.
            let _ = fs::remove_file(&staged).await;
            return Err(AppError::StorageWrite(err));
        }

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "slot written");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
