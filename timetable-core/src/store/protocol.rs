//! JSON bodies exchanged with the schedule store.

use serde::{Deserialize, Serialize};

/// `GET` response. Records are kept as raw JSON so one bad record
/// does not fail the whole list.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub schedule: Vec<serde_json::Value>,
}

/// Identifier as returned by the store: text, or a bare database number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(s) => s,
            RecordId::Number(n) => n.to_string(),
        }
    }
}

/// `POST` response.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    pub id: RecordId,
    #[serde(default)]
    pub message: Option<String>,
}

/// `PUT` / `DELETE` response.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query parameters for `DELETE`.
#[derive(Debug, Serialize)]
pub struct DeleteQuery<'a> {
    pub id: &'a str,
}
