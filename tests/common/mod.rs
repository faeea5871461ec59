// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared test environments, parameter tables, and templates

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

/// Two scan points over the squark/neutralino mass grid
pub const SAMPLE_TABLE: &str = "MSQUARK\tMCHI\tCTAU\n350\t148\t10\n1000\t148\t100\n";

/// Minimal stand-in for the production config template
pub const SAMPLE_TEMPLATE: &str = "\
SQUARK_MASS = ${MSQUARK}
CHI_MASS = ${MCHI}
CTAU_MM = ${CTAU}
WIDTH_GEV = ${WIDTH}
OUTPUT_FILE = '${GEN_ROOT_NAME}'
";

pub struct TestEnvironment {
    temp: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn cfg_dir(&self) -> PathBuf {
        self.temp.path().join("GEN_cff_files")
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.temp.path().join("RunningCommands")
    }

    pub async fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::write(&path, content).await.expect("failed to write test file");
        path
    }

    pub async fn write_sample_table(&self) -> PathBuf {
        self.write_file("parameters.txt", SAMPLE_TABLE).await
    }

    pub async fn write_sample_template(&self) -> PathBuf {
        self.write_file("template_cff.py", SAMPLE_TEMPLATE).await
    }

    /// List file names in a directory, sorted
    pub async fn list_files(&self, dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir).await.expect("failed to read dir");
        while let Some(entry) = entries.next_entry().await.expect("failed to read entry") {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        names
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
