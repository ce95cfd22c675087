//! Runtime configuration.
//!
//! Values are resolved from built-in defaults, then a `.env` file, then the
//! process environment. The command line can override both fields.

use crate::domain::manager::ContactStore;
use crate::errors::Result;
use crate::storage::{self, StorageMediums};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_JSON_STORAGE_PATH: &str = "./.instance/contacts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Env: `STORAGE_CHOICE` (`json` or `mem`). Default: `json`.
    pub storage_choice: StorageMediums,

    /// Location of the contacts file for the `json` medium.
    /// Env: `JSON_STORAGE_PATH`. Default: `./.instance/contacts.json`.
    pub json_storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_choice: StorageMediums::Json,
            json_storage_path: PathBuf::from(DEFAULT_JSON_STORAGE_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(choice) = env::var("STORAGE_CHOICE") {
            config.storage_choice = StorageMediums::from(&choice)?;
        }
        if let Ok(path) = env::var("JSON_STORAGE_PATH")
            && !path.trim().is_empty()
        {
            config.json_storage_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        storage_choice: Option<&str>,
        json_storage_path: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(choice) = storage_choice {
            self.storage_choice = StorageMediums::from(choice)?;
        }
        if let Some(path) = json_storage_path {
            self.json_storage_path = path;
        }
        Ok(self)
    }

    pub fn open_store(&self) -> ContactStore {
        tracing::debug!(
            medium = self.storage_choice.is_which(),
            path = %self.json_storage_path.display(),
            "opening contact store"
        );
        ContactStore::from_boxed(storage::parse_storage_type(
            self.storage_choice,
            &self.json_storage_path,
        ))
    }
}
