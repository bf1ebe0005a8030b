use std::path::{Path, PathBuf};

use anyhow::bail;
use async_trait::async_trait;
use uuid::Uuid;

use super::StorageService;

/// Filesystem image store. Files land in `root` as `{uuid}.{ext}` and are
/// published under `base_url`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageService for LocalStorage {
    async fn store(&self, file_name: Option<&str>, content: &[u8]) -> anyhow::Result<String> {
        if content.is_empty() {
            bail!("refusing to store empty file {}", file_name.unwrap_or("<unnamed>"));
        }

        let id = match file_name.and_then(extension) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4().simple()),
            None => Uuid::new_v4().simple().to_string(),
        };

        self.init().await?;
        tokio::fs::write(self.root.join(&id), content).await?;
        tracing::info!(id = %id, bytes = content.len(), "image stored");
        Ok(id)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            bail!("invalid blob id {id}");
        }
        match tokio::fs::remove_file(self.root.join(id)).await {
            Ok(()) => {
                tracing::info!(id = %id, "image deleted");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url)
    }
}

fn extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
