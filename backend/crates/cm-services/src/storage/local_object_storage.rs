use crate::storage::{ObjectStorage, StoredObject};
use crate::{ServiceError, ServiceResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

/// Objects on the local filesystem under `root/<owner>/`.
#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn owner_dir(&self, owner: Uuid) -> PathBuf {
        self.root.join(owner.to_string())
    }
}

/// Keeps `[A-Za-z0-9._-]` and replaces everything else, so a name can't escape the
/// owner directory.
pub(crate) fn sanitize_file_name(file_name: &str) -> ServiceResult<String> {
    let sanitized: String = file_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        return Err(ServiceError::validation(format!(
            "invalid object file name '{}'",
            file_name
        )));
    }

    Ok(sanitized)
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn upload(
        &self,
        owner: Uuid,
        file_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<StoredObject> {
        let name = format!(
            "{}-{}",
            cm_core::timestamp::now().timestamp_millis(),
            sanitize_file_name(file_name)?
        );

        let dir = self.owner_dir(owner);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            ServiceError::storage(format!("failed to create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(&name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            ServiceError::storage(format!("failed to write {}: {}", path.display(), e))
        })?;

        debug!("Stored {} bytes at {}", bytes.len(), path.display());

        let key = format!("{}/{}", owner, name);
        Ok(StoredObject {
            url: format!("{}/{}", self.public_base_url, key),
            key,
        })
    }

    async fn delete_owner(&self, owner: Uuid) -> ServiceResult<u64> {
        let dir = self.owner_dir(owner);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(ServiceError::storage(format!(
                    "failed to read {}: {}",
                    dir.display(),
                    e
                )));
            }
        };

        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ServiceError::storage(format!("failed to list {}: {}", dir.display(), e)))?
        {
            if entry.file_type().await.is_ok_and(|t| t.is_file()) {
                removed += 1;
            }
        }

        tokio::fs::remove_dir_all(&dir).await.map_err(|e| {
            ServiceError::storage(format!("failed to remove {}: {}", dir.display(), e))
        })?;

        info!("Removed {} stored objects for {}", removed, owner);
        Ok(removed)
    }
}
