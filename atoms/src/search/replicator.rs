//! Mirrors newly inserted image records from the DynamoDB stream into the
//! search index.
//!
//! Only INSERT records are replicated. Modifications and removals are
//! skipped; records are never updated in place and nothing deletes them.

use aws_lambda_events::event::dynamodb::EventRecord;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::index::SearchIndex;
use super::model::{ChangeKind, ImageDocument};
use crate::error::GalleryError;

/// Upper bound on index requests in flight for one batch
pub const MAX_CONCURRENT_UPSERTS: usize = 10;

/// Project one stream record onto a search document.
///
/// Returns `Ok(None)` for anything that is not an insertion.
pub fn project_insert(record: &EventRecord) -> Result<Option<ImageDocument>, GalleryError> {
    let kind = ChangeKind::from(record.event_name.as_str());
    if kind != ChangeKind::Insert {
        debug!(event_id = %record.event_id, ?kind, "Skipping non-insert record");
        return Ok(None);
    }

    let document: ImageDocument = serde_dynamo::from_item(record.change.new_image.clone())
        .map_err(|e| GalleryError::malformed_record(format!("{}: {}", record.event_id, e)))?;
    Ok(Some(document))
}

/// Upsert every insertion of the batch into the index.
///
/// All records are decoded before the first write, so a malformed record
/// fails the batch without touching the index. Upserts then run
/// concurrently, at most `MAX_CONCURRENT_UPSERTS` at a time. Any failure
/// fails the batch and Lambda redelivers it, which is safe because upserts
/// are idempotent. Returns the number of documents written.
pub async fn replicate_batch(
    index: &dyn SearchIndex,
    records: &[EventRecord],
) -> Result<usize, GalleryError> {
    let documents = records
        .iter()
        .map(project_insert)
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>, _>>()?;

    stream::iter(documents.iter())
        .map(|document| {
            info!(image_id = %document.image_id, group_id = %document.group_id, "Replicating image");
            index.upsert_image(document)
        })
        .boxed()
        .buffer_unordered(MAX_CONCURRENT_UPSERTS)
        .try_collect::<Vec<()>>()
        .await?;

    Ok(documents.len())
}
