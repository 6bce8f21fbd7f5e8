//! Errors raised by the image services.
//!
//! Domain outcomes such as a missing group or image are not errors; they are
//! turned into responses by the handlers. Everything here propagates to the
//! Lambda runtime and fails the invocation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// DynamoDB request failed.
    #[error("Metadata store error: {0}")]
    MetadataStore(String),

    /// S3 request or presigning failed.
    #[error("Blob store error: {0}")]
    BlobStore(String),

    /// Search index request failed or was rejected.
    #[error("Search index error: {0}")]
    SearchIndex(String),

    /// A change-feed record did not carry the expected image attributes.
    #[error("Malformed change record: {0}")]
    MalformedRecord(String),
}

impl GalleryError {
    pub fn metadata_store(msg: impl Into<String>) -> Self {
        Self::MetadataStore(msg.into())
    }

    pub fn blob_store(msg: impl Into<String>) -> Self {
        Self::BlobStore(msg.into())
    }

    pub fn search_index(msg: impl Into<String>) -> Self {
        Self::SearchIndex(msg.into())
    }

    pub fn malformed_record(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }
}
