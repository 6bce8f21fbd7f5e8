use lambda_http::{Body, Error as LambdaError, Response, http::StatusCode};
use super::model::CreateImagePayload;
use super::repository::ImageRepository;
use super::storage::BlobStore;
use super::service::{create_image, get_image, CreateImageOutcome};

/// HTTP Handler: POST /groups/{groupId}/images
///
/// An unparsable body fails the invocation instead of producing a 4xx.
pub async fn create_image_handler(
    repository: &dyn ImageRepository,
    blobs: &dyn BlobStore,
    group_id: &str,
    body: &[u8],
) -> Result<Response<Body>, LambdaError> {
    let payload: CreateImagePayload = serde_json::from_slice(body)?;

    match create_image(repository, blobs, group_id, payload).await? {
        CreateImageOutcome::Created(created) => Ok(Response::builder()
            .status(StatusCode::CREATED)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&created)?.into())
            .map_err(Box::new)?),
        CreateImageOutcome::GroupNotFound => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::json!({"error": "Group does not exist"}).to_string().into())
            .map_err(Box::new)?),
    }
}

/// HTTP Handler: GET /images/{imageId}
pub async fn get_image_handler(
    repository: &dyn ImageRepository,
    image_id: &str,
) -> Result<Response<Body>, LambdaError> {
    match get_image(repository, image_id).await? {
        Some(image) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(serde_json::to_string(&image)?.into())
            .map_err(Box::new)?),
        None => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Access-Control-Allow-Origin", "*")
            .body(Body::Empty)
            .map_err(Box::new)?),
    }
}
