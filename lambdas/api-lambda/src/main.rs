use gallery_shared::{init_tracing, load_aws_config, AppState, ImagesApiConfig};
use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = ImagesApiConfig::from_env()?;
    let aws_config = load_aws_config().await;
    let state = Arc::new(AppState::new(&aws_config, &config));

    run(service_fn(move |event: Request| {
        let state = state.clone();
        async move { function_handler(event, state).await }
    }))
    .await
}
