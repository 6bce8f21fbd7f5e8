// Re-export model types and service functions
pub mod model;
pub mod repository;
pub mod storage;
pub mod service;
pub mod http;

pub use model::{Image, CreateImagePayload, CreateImageResponse};
pub use repository::{ImageRepository, DynamoImageRepository};
pub use storage::{BlobStore, S3BlobStore};
pub use service::*;
pub use http::*;

#[cfg(test)]
pub(crate) mod fakes;
