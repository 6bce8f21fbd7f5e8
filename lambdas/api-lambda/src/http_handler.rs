use gallery_atoms::images;
use gallery_shared::AppState;
use lambda_http::{
    http::{header::HeaderValue, Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use std::borrow::Cow;
use std::sync::Arc;

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    resp.headers_mut()
        .insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    resp
}

/// API Gateway's decoded path parameter, else the percent-decoded path segment
fn path_param<'a>(decoded: Option<&'a str>, segment: &'a str) -> Result<Cow<'a, str>, Error> {
    match decoded {
        Some(value) => Ok(Cow::Borrowed(value)),
        None => Ok(urlencoding::decode(segment)?),
    }
}

fn json_error(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::json!({ "error": message }).to_string().into())
        .map_err(Box::new)?;
    Ok(with_cors_headers(resp))
}

/// Main Lambda handler - routes image requests by method and path
///
/// Only the trailing path segments are matched, so an API Gateway stage
/// prefix makes no difference.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!("Processing event - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Methods", "GET,POST,OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    let params = event.path_parameters();
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, parts.as_slice()) {
        // .../groups/{groupId}/images
        (&Method::POST, [.., "groups", group_id, "images"]) => {
            let group_id = path_param(params.first("groupId"), group_id)?;
            images::create_image_handler(
                state.images.as_ref(),
                state.blobs.as_ref(),
                &group_id,
                event.body(),
            )
            .await
        }
        // .../images/{imageId}
        (&Method::GET, [.., "images", image_id]) => {
            let image_id = path_param(params.first("imageId"), image_id)?;
            images::get_image_handler(state.images.as_ref(), &image_id).await
        }
        (_, [.., "groups", _, "images"]) | (_, [.., "images", _]) => {
            json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        _ => json_error(StatusCode::NOT_FOUND, "Not found"),
    }
}
