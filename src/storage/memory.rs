use super::*;
use tokio::sync::Mutex;

/// Process-local slot. Contents vanish with the process.
#[derive(Default)]
pub struct MemorySlot {
    data: Mutex<Option<Vec<u8>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `bytes`, as if written by an earlier run.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Mutex::new(Some(bytes.into())),
        }
    }
}

#[async_trait]
impl DurableSlot for MemorySlot {
    async fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.data.lock().await.clone())
    }

    async fn write(&self, bytes: &[u8]) -> Result<()> {
        *self.data.lock().await = Some(bytes.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
