use serde::{Deserialize, Serialize};

/// Search-side projection of an image record.
///
/// Decoded straight from a stream `NewImage`; attributes not listed here are
/// ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDocument {
    pub image_id: String,
    pub group_id: String,
    pub image_url: String,
    pub title: String,
    pub timestamp: String,
}

/// Kind of a DynamoDB stream record, from its `eventName`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Modify,
    Remove,
    Unknown,
}

impl From<&str> for ChangeKind {
    fn from(event_name: &str) -> Self {
        match event_name {
            "INSERT" => ChangeKind::Insert,
            "MODIFY" => ChangeKind::Modify,
            "REMOVE" => ChangeKind::Remove,
            _ => ChangeKind::Unknown,
        }
    }
}
