use aws_lambda_events::event::dynamodb::Event;
use gallery_atoms::search::{replicate_batch, OpenSearchIndex, SearchIndex};
use gallery_shared::{init_tracing, load_aws_config, SearchSyncConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::info;

/// Main handler for DynamoDB Stream events on the images table
async fn function_handler(event: LambdaEvent<Event>, index: &dyn SearchIndex) -> Result<(), Error> {
    info!(
        "Processing events batch from DynamoDB with {} records",
        event.payload.records.len()
    );

    let indexed = replicate_batch(index, &event.payload.records).await?;

    info!(indexed, "Batch replicated");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = SearchSyncConfig::from_env()?;
    let aws_config = load_aws_config().await;
    let index = OpenSearchIndex::new(&config.search_endpoint, &config.search_index, &aws_config)?;

    let index = &index;
    run(service_fn(move |event: LambdaEvent<Event>| async move {
        function_handler(event, index).await
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gallery_atoms::search::ImageDocument;
    use gallery_atoms::GalleryError;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingIndex {
        ids: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchIndex for RecordingIndex {
        async fn upsert_image(&self, document: &ImageDocument) -> Result<(), GalleryError> {
            self.ids.lock().unwrap().push(document.image_id.clone());
            Ok(())
        }
    }

    fn stream_record(event_name: &str, image_id: &str) -> serde_json::Value {
        json!({
            "eventID": format!("evt-{}", image_id),
            "eventName": event_name,
            "eventVersion": "1.1",
            "eventSource": "aws:dynamodb",
            "awsRegion": "us-east-1",
            "dynamodb": {
                "ApproximateCreationDateTime": 1577836800.0,
                "Keys": { "imageId": { "S": image_id } },
                "NewImage": {
                    "imageId": { "S": image_id },
                    "groupId": { "S": "g1" },
                    "imageUrl": { "S": format!("https://bucket.s3.amazonaws.com/{}", image_id) },
                    "title": { "S": "Lake" },
                    "timestamp": { "S": "2020-01-01T00:00:00.000Z" }
                },
                "SequenceNumber": "4421584500000000017450439091",
                "SizeBytes": 120,
                "StreamViewType": "NEW_IMAGE"
            },
            "eventSourceARN": "arn:aws:dynamodb:us-east-1:123456789012:table/Images-dev/stream/2020-01-01T00:00:00.000"
        })
    }

    #[tokio::test]
    async fn indexes_only_inserted_images() {
        let payload: Event = serde_json::from_value(json!({
            "Records": [
                stream_record("INSERT", "i1"),
                stream_record("MODIFY", "i1"),
                stream_record("INSERT", "i2"),
            ]
        }))
        .unwrap();
        let index = RecordingIndex::default();

        function_handler(LambdaEvent::new(payload, Context::default()), &index)
            .await
            .unwrap();

        let mut ids = index.ids.lock().unwrap().clone();
        ids.sort();
        assert_eq!(ids, vec!["i1".to_string(), "i2".to_string()]);
    }
}
