//! Environment configuration, resolved once at cold start.

use std::env;
use std::time::Duration;

use gallery_atoms::search::DEFAULT_INDEX;
use thiserror::Error;

pub const DEFAULT_SIGNED_URL_EXPIRATION_SECS: u64 = 300;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidExpiration { name: &'static str, value: String },
}

/// Settings for the ingestion and lookup handlers
#[derive(Debug, Clone)]
pub struct ImagesApiConfig {
    pub groups_table: String,
    pub images_table: String,
    pub image_id_index: String,
    pub images_bucket: String,
    pub signed_url_expiration: Duration,
}

impl ImagesApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let signed_url_expiration = match lookup("SIGNED_URL_EXPIRATION") {
            None => Duration::from_secs(DEFAULT_SIGNED_URL_EXPIRATION_SECS),
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidExpiration {
                        name: "SIGNED_URL_EXPIRATION",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            groups_table: required(&lookup, "GROUPS_TABLE")?,
            images_table: required(&lookup, "IMAGES_TABLE")?,
            image_id_index: required(&lookup, "IMAGE_ID_INDEX")?,
            images_bucket: required(&lookup, "IMAGES_S3_BUCKET")?,
            signed_url_expiration,
        })
    }
}

/// Settings for the stream replicator
#[derive(Debug, Clone)]
pub struct SearchSyncConfig {
    pub search_endpoint: String,
    pub search_index: String,
}

impl SearchSyncConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            search_endpoint: required(&lookup, "ES_ENDPOINT")?,
            search_index: lookup("SEARCH_INDEX").unwrap_or_else(|| DEFAULT_INDEX.to_string()),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
