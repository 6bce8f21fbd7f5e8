//! OpenSearch / Elasticsearch implementation of `SearchIndex`.
//!
//! Requests are SigV4-signed with the Lambda's credentials, as required by
//! Amazon OpenSearch Service domains.

use ::opensearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    IndexParts, OpenSearch,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use tracing::{debug, error, info};
use url::Url;

use super::index::SearchIndex;
use super::model::ImageDocument;
use crate::error::GalleryError;

pub struct OpenSearchIndex {
    client: OpenSearch,
    index: String,
}

impl OpenSearchIndex {
    /// Create a client for the domain at `endpoint` writing into `index`.
    pub fn new(
        endpoint: &str,
        index: impl Into<String>,
        aws_config: &SdkConfig,
    ) -> Result<Self, GalleryError> {
        let url = Url::parse(endpoint)
            .map_err(|e| GalleryError::search_index(format!("Invalid endpoint {}: {}", endpoint, e)))?;
        let credentials = Credentials::try_from(aws_config.clone())
            .map_err(|e| GalleryError::search_index(e.to_string()))?;

        let transport = TransportBuilder::new(SingleNodeConnectionPool::new(url))
            .auth(credentials)
            .service_name("es")
            .build()
            .map_err(|e| GalleryError::search_index(e.to_string()))?;

        let index = index.into();
        info!(endpoint, index = %index, "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
            index,
        })
    }
}

#[async_trait]
impl SearchIndex for OpenSearchIndex {
    /// `PUT /{index}/_doc/{imageId}`: creates or replaces the whole document.
    async fn upsert_image(&self, document: &ImageDocument) -> Result<(), GalleryError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index, &document.image_id))
            .body(document)
            .send()
            .await
            .map_err(|e| GalleryError::search_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(GalleryError::search_index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(image_id = %document.image_id, "Document indexed");
        Ok(())
    }
}
