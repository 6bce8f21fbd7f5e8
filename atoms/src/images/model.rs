use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Image domain model - metadata for one uploaded picture in a group
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_id: String,
    pub group_id: String,
    pub title: String,
    pub timestamp: String,
    pub image_url: String,
    /// Stored attributes this service does not own, returned untouched on lookup
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct CreateImagePayload {
    pub title: String,
}

/// Body of a successful POST /groups/{groupId}/images
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageResponse {
    pub new_image: Image,
    pub upload_url: String,
}
