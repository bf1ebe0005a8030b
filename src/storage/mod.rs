//! Blob storage for product images.
//!
//! A stored blob is addressed by the identifier `store` returns; `url`
//! turns that identifier into an address clients can fetch.

use async_trait::async_trait;

mod local;

pub use local::LocalStorage;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Stores `content` and returns its identifier. `file_name` is the name
    /// the client sent, if any.
    async fn store(&self, file_name: Option<&str>, content: &[u8]) -> anyhow::Result<String>;

    /// Removes a stored blob. Removing an unknown id is not an error.
    async fn delete(&self, id: &str) -> anyhow::Result<()>;

    fn url(&self, id: &str) -> String;
}
