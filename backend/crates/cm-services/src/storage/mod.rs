//! Object storage for certificate images.

pub(crate) mod local_object_storage;

pub use local_object_storage::LocalObjectStorage;

use crate::ServiceResult;

use async_trait::async_trait;
use uuid::Uuid;

/// An uploaded object and the public URL it resolves at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// `<owner>/<name>` relative to the storage root
    pub key: String,
    pub url: String,
}

/// Blob store with objects grouped under an owner prefix.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, owner: Uuid, file_name: &str, bytes: &[u8])
    -> ServiceResult<StoredObject>;

    /// Removes everything under the owner's prefix. Returns how many objects were removed.
    async fn delete_owner(&self, owner: Uuid) -> ServiceResult<u64>;
}
