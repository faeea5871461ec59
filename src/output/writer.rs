// ABOUTME: File writer for rendered output files
// ABOUTME: Creates parent directories and silently overwrites existing files

use tokio::fs;
use tracing::{debug, info};

use super::error::{OutputError, Result};
use crate::render::RenderedFile;

/// Writes rendered files to disk. Existing files at the destination are
/// overwritten silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    pub async fn write(&self, file: &RenderedFile) -> Result<()> {
        if let Some(parent) = file.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| OutputError::CreateDirError {
                        path: parent.display().to_string(),
                        source,
                    })?;
                debug!("Ensured output directory: {}", parent.display());
            }
        }

        fs::write(&file.path, &file.content)
            .await
            .map_err(|source| OutputError::WriteError {
                path: file.path.display().to_string(),
                source,
            })?;

        info!(
            "Wrote {} ({} bytes)",
            file.path.display(),
            file.content.len()
        );
        Ok(())
    }
}
