use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};
use std::collections::HashMap;

use super::model::Image;
use crate::error::GalleryError;

/// Metadata store for image records and the groups they belong to.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Point lookup of a group by id.
    async fn group_exists(&self, group_id: &str) -> Result<bool, GalleryError>;

    /// Unconditional write of an image record.
    async fn put_image(&self, image: &Image) -> Result<(), GalleryError>;

    /// All records whose `imageId` matches, in the order the index returns them.
    async fn find_images_by_id(&self, image_id: &str) -> Result<Vec<Image>, GalleryError>;
}

/// DynamoDB-backed repository.
///
/// Groups live in their own table keyed by `id`. Images are queried through a
/// secondary index whose hash key is `imageId`.
pub struct DynamoImageRepository {
    client: DynamoClient,
    groups_table: String,
    images_table: String,
    image_id_index: String,
}

impl DynamoImageRepository {
    pub fn new(
        client: DynamoClient,
        groups_table: impl Into<String>,
        images_table: impl Into<String>,
        image_id_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            groups_table: groups_table.into(),
            images_table: images_table.into(),
            image_id_index: image_id_index.into(),
        }
    }
}

#[async_trait]
impl ImageRepository for DynamoImageRepository {
    async fn group_exists(&self, group_id: &str) -> Result<bool, GalleryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.groups_table)
            .key("id", AttributeValue::S(group_id.to_string()))
            .send()
            .await
            .map_err(|e| GalleryError::metadata_store(format!("DynamoDB get_item error: {}", e)))?;

        tracing::debug!(group_id, found = result.item().is_some(), "Get group");
        Ok(result.item().is_some())
    }

    async fn put_image(&self, image: &Image) -> Result<(), GalleryError> {
        let item: HashMap<String, AttributeValue> = to_item(image)
            .map_err(|e| GalleryError::metadata_store(format!("Image record encode error: {}", e)))?;

        self.client
            .put_item()
            .table_name(&self.images_table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| GalleryError::metadata_store(format!("DynamoDB put_item error: {}", e)))?;

        Ok(())
    }

    async fn find_images_by_id(&self, image_id: &str) -> Result<Vec<Image>, GalleryError> {
        let result = self
            .client
            .query()
            .table_name(&self.images_table)
            .index_name(&self.image_id_index)
            .key_condition_expression("imageId = :imageId")
            .expression_attribute_values(":imageId", AttributeValue::S(image_id.to_string()))
            .send()
            .await
            .map_err(|e| GalleryError::metadata_store(format!("DynamoDB query error: {}", e)))?;

        images_from_items(result.items.unwrap_or_default())
    }
}

/// Decode stored items; a record missing one of its fields is an error, not a blank.
fn images_from_items(
    items: Vec<HashMap<String, AttributeValue>>,
) -> Result<Vec<Image>, GalleryError> {
    from_items(items)
        .map_err(|e| GalleryError::metadata_store(format!("Malformed image record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    fn stored_item() -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("imageId".to_string(), s("i1")),
            ("groupId".to_string(), s("g1")),
            ("title".to_string(), s("Sunset")),
            ("timestamp".to_string(), s("2020-01-01T00:00:00.000Z")),
            ("imageUrl".to_string(), s("https://b.s3.amazonaws.com/i1")),
        ])
    }

    #[test]
    fn decodes_stored_record() {
        let images = images_from_items(vec![stored_item()]).unwrap();

        assert_eq!(images.len(), 1);
        let image = &images[0];
        assert_eq!(image.image_id, "i1");
        assert_eq!(image.group_id, "g1");
        assert_eq!(image.title, "Sunset");
        assert_eq!(image.timestamp, "2020-01-01T00:00:00.000Z");
        assert_eq!(image.image_url, "https://b.s3.amazonaws.com/i1");
        assert!(image.extra.is_empty());
    }

    #[test]
    fn unknown_attributes_survive_lookup() {
        let mut item = stored_item();
        item.insert("owner".to_string(), s("alice"));

        let images = images_from_items(vec![item]).unwrap();

        assert_eq!(
            serde_json::to_value(&images[0]).unwrap(),
            serde_json::json!({
                "imageId": "i1",
                "groupId": "g1",
                "title": "Sunset",
                "timestamp": "2020-01-01T00:00:00.000Z",
                "imageUrl": "https://b.s3.amazonaws.com/i1",
                "owner": "alice"
            })
        );
    }

    #[test]
    fn missing_attribute_is_a_decode_error() {
        let mut item = stored_item();
        item.remove("title");

        let err = images_from_items(vec![item]).unwrap_err();

        assert!(matches!(err, GalleryError::MetadataStore(_)));
    }

    #[test]
    fn stored_item_matches_record_fields() {
        let image = images_from_items(vec![stored_item()]).unwrap().remove(0);

        let item: HashMap<String, AttributeValue> = to_item(&image).unwrap();

        assert_eq!(item, stored_item());
    }
}
