use chrono::SecondsFormat;

use super::model::{CreateImagePayload, CreateImageResponse, Image};
use super::repository::ImageRepository;
use super::storage::BlobStore;
use crate::error::GalleryError;

/// Result of an ingestion request that did not fail outright
#[derive(Debug)]
pub enum CreateImageOutcome {
    Created(CreateImageResponse),
    GroupNotFound,
}

/// Create a new image in a group (pure domain logic, no HTTP)
///
/// The id, public URL and upload URL are computed before the group check, so
/// a missing group costs one read and no write.
pub async fn create_image(
    repository: &dyn ImageRepository,
    blobs: &dyn BlobStore,
    group_id: &str,
    payload: CreateImagePayload,
) -> Result<CreateImageOutcome, GalleryError> {
    let image_id = uuid::Uuid::new_v4().to_string();
    let timestamp = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let image_url = blobs.object_url(&image_id);
    let upload_url = blobs.upload_url(&image_id).await?;

    if !repository.group_exists(group_id).await? {
        tracing::info!(group_id, "Group does not exist");
        return Ok(CreateImageOutcome::GroupNotFound);
    }

    let image = Image {
        image_id,
        group_id: group_id.to_string(),
        title: payload.title,
        timestamp,
        image_url,
        extra: Default::default(),
    };
    repository.put_image(&image).await?;

    tracing::info!(group_id, image_id = %image.image_id, "Image created");
    Ok(CreateImageOutcome::Created(CreateImageResponse {
        new_image: image,
        upload_url,
    }))
}

/// Get a specific image through the imageId index
///
/// Ids are unique by construction; should the index ever return several
/// items, the first one wins.
pub async fn get_image(
    repository: &dyn ImageRepository,
    image_id: &str,
) -> Result<Option<Image>, GalleryError> {
    let matches = repository.find_images_by_id(image_id).await?;
    if matches.len() > 1 {
        tracing::warn!(image_id, count = matches.len(), "Duplicate image records for id");
    }
    Ok(matches.into_iter().next())
}
