//! HTTP client for the schedule store API.
//!
//! One endpoint serves every operation:
//! `GET` lists, `POST` creates, `PUT` updates by id in the body,
//! `DELETE` removes by `?id=`.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use tracing::{debug, info};

use super::protocol::{CreateResponse, DeleteQuery, ErrorResponse, ListResponse, MessageResponse};
use super::{ScheduleListing, ScheduleStore, decode_records};
use crate::entry::{EntryDraft, ScheduleEntry};
use crate::error::{TimetableError, TimetableResult};

/// Schedule store reached over HTTP.
pub struct HttpScheduleStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpScheduleStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> TimetableResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ScheduleStore for HttpScheduleStore {
    /// `GET <base>`
    async fn list(&self) -> TimetableResult<ScheduleListing> {
        debug!("GET {}", self.base_url);
        let resp = self.http.get(&self.base_url).send().await?;
        let resp = check_status(resp).await?;

        let body: ListResponse = decode_body(resp).await?;
        let listing = decode_records(body.schedule);

        info!(
            "Fetched {} schedule entries ({} rejected)",
            listing.entries.len(),
            listing.rejected.len()
        );
        Ok(listing)
    }

    /// `POST <base>`
    async fn create(&self, draft: &EntryDraft) -> TimetableResult<String> {
        debug!("POST {} ({})", self.base_url, draft.subject);
        let resp = self.http.post(&self.base_url).json(draft).send().await?;
        let resp = check_status(resp).await?;

        let body: CreateResponse = decode_body(resp).await?;
        if let Some(message) = body.message {
            debug!("Store: {}", message);
        }
        Ok(body.id.into())
    }

    /// `PUT <base>`
    async fn update(&self, entry: &ScheduleEntry) -> TimetableResult<()> {
        debug!("PUT {} (id {})", self.base_url, entry.id);
        let resp = self.http.put(&self.base_url).json(entry).send().await?;
        let resp = check_status(resp).await?;

        log_message(resp).await;
        Ok(())
    }

    /// `DELETE <base>?id=<id>`
    async fn delete(&self, id: &str) -> TimetableResult<()> {
        debug!("DELETE {} (id {})", self.base_url, id);
        let resp = self
            .http
            .delete(&self.base_url)
            .query(&DeleteQuery { id })
            .send()
            .await?;
        let resp = check_status(resp).await?;

        log_message(resp).await;
        Ok(())
    }
}

/// Turn a non-2xx response into `TimetableError::Store`, using the
/// `{"error": ...}` body when there is one.
async fn check_status(resp: Response) -> TimetableResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(err) => err.error,
        Err(_) if !text.trim().is_empty() => text.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Err(TimetableError::Store {
        status: status.as_u16(),
        message,
    })
}

async fn decode_body<T: serde::de::DeserializeOwned>(resp: Response) -> TimetableResult<T> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| TimetableError::Decode(e.to_string()))
}

/// Mutations answer with `{"message": ...}`; the body is informational only.
async fn log_message(resp: Response) {
    if resp.status() == StatusCode::NO_CONTENT {
        return;
    }
    if let Ok(MessageResponse {
        message: Some(message),
    }) = resp.json::<MessageResponse>().await
    {
        debug!("Store: {}", message);
    }
}
