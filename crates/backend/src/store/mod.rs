//! Persistence seams for the hosted document database and the media CDN.
//!
//! Handlers only ever see the two traits below; the production
//! implementations talk REST to the hosted services. Keeping the seam at
//! plain JSON documents means the typed layer in [`content`] owns all
//! defaulting and shaping in one place.

pub mod cdn;
pub mod content;
pub mod firestore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;

pub use cdn::CdnClient;
pub use firestore::FirestoreClient;

/// A hosted document database, reduced to what the portfolio needs:
/// fixed-name documents per content section plus an append-only collection
/// of contact submissions.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch one document's fields, or `None` if it does not exist.
    async fn get_document(&self, collection: &str, doc: &str) -> ApiResult<Option<Value>>;

    /// Create or fully replace one document.
    async fn set_document(&self, collection: &str, doc: &str, fields: Value) -> ApiResult<()>;

    /// Append a document with a store-generated id; returns the id.
    async fn add_document(&self, collection: &str, fields: Value) -> ApiResult<String>;

    /// List all documents in a collection ordered by one field.
    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        descending: bool,
    ) -> ApiResult<Vec<(String, Value)>>;
}

/// A hosted media CDN: bytes in, public URL out.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<String>;
}
