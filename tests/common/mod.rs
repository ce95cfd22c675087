#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one contacts file, isolated from any `.env`.
pub struct Book {
    pub dir: TempDir,
}

impl Book {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(".instance").join("contacts.json")
    }

    pub fn rolodex(&self) -> Command {
        rolodex_at(self.dir.path(), &self.path())
    }

    /// Runs `add` and returns the id printed for the new contact.
    pub fn add(&self, args: &[&str]) -> String {
        let output = self
            .rolodex()
            .arg("add")
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success(), "add failed: {output:?}");

        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("Id: "))
            .map(str::to_string)
            .unwrap()
    }
}

pub fn rolodex_at(cwd: &Path, json_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.current_dir(cwd)
        .env("STORAGE_CHOICE", "json")
        .env("JSON_STORAGE_PATH", json_path)
        .env_remove("RUST_LOG");
    cmd
}

pub fn listing_format(i: usize, name: &str, phone: &str, email: &str, id: &str) -> String {
    format!("{i:>3}. {name:<20} {phone:15} {email:<30} {id}")
}
