pub mod config;

use std::sync::Arc;

use aws_config::{BehaviorVersion, SdkConfig};
use gallery_atoms::images::{BlobStore, DynamoImageRepository, ImageRepository, S3BlobStore};

pub use config::{ConfigError, ImagesApiConfig, SearchSyncConfig};

/// Clients shared by every invocation of the API lambda.
///
/// Built once in `main` and handed to the handler; nothing reaches for
/// global client instances.
pub struct AppState {
    pub images: Arc<dyn ImageRepository>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(aws_config: &SdkConfig, config: &ImagesApiConfig) -> Self {
        let dynamo_client = aws_sdk_dynamodb::Client::new(aws_config);
        let s3_client = aws_sdk_s3::Client::new(aws_config);

        Self {
            images: Arc::new(DynamoImageRepository::new(
                dynamo_client,
                &config.groups_table,
                &config.images_table,
                &config.image_id_index,
            )),
            blobs: Arc::new(S3BlobStore::new(
                s3_client,
                &config.images_bucket,
                config.signed_url_expiration,
            )),
        }
    }
}

/// Region and credentials from the Lambda environment
pub async fn load_aws_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Install the fmt subscriber. CloudWatch stamps each line, so no timestamp.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
}
