pub mod model;
pub mod index;
pub mod opensearch;
pub mod replicator;

pub use model::{ChangeKind, ImageDocument};
pub use index::SearchIndex;
pub use self::opensearch::OpenSearchIndex;
pub use replicator::{project_insert, replicate_batch};

/// Index name used when none is configured
pub const DEFAULT_INDEX: &str = "images-index";
