//! Typed client for the remote `/notes` store.
//!
//! [`NoteStore`] is the seam the controller talks through; [`HttpNoteStore`]
//! is the reqwest implementation used by the binary.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::error::ClientError;
use crate::models::{Note, NoteId, NotePayload};
use crate::url_validator::{note_url, notes_url};

/// The four REST operations the client needs.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// `GET /notes`, or `GET /notes?q={query}` when a query is given.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Note>, ClientError>;

    /// `POST /notes`. The created note in the response is not needed.
    async fn create(&self, payload: &NotePayload) -> Result<(), ClientError>;

    /// `PUT /notes/{id}`.
    async fn update(&self, id: NoteId, payload: &NotePayload) -> Result<(), ClientError>;

    /// `DELETE /notes/{id}`.
    async fn delete(&self, id: NoteId) -> Result<(), ClientError>;
}

pub struct HttpNoteStore {
    base_url: Url,
    client: reqwest::Client,
}

/// Error body produced by the store on 4xx/5xx: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpNoteStore {
    /// `base_url` must already be validated (see [`crate::url_validator`]).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }
}

/// Turn a non-success response into [`ClientError::Status`], preferring the
/// server's own error message when it sent one.
async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => body,
    };

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Note>, ClientError> {
        let url = notes_url(&self.base_url)?;
        let mut request = self.client.get(url);
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }
        tracing::debug!(query = ?query, "GET /notes");

        let resp = check_status(request.send().await?).await?;
        // Read the body first so a transport failure and bad JSON stay distinct
        let body = resp.text().await?;
        let notes: Vec<Note> = serde_json::from_str(&body)?;
        Ok(notes)
    }

    async fn create(&self, payload: &NotePayload) -> Result<(), ClientError> {
        let url = notes_url(&self.base_url)?;
        tracing::debug!(title = %payload.title, "POST /notes");
        let resp = self.client.post(url).json(payload).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn update(&self, id: NoteId, payload: &NotePayload) -> Result<(), ClientError> {
        let url = note_url(&self.base_url, id)?;
        tracing::debug!(%id, "PUT /notes/{{id}}");
        let resp = self.client.put(url).json(payload).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), ClientError> {
        let url = note_url(&self.base_url, id)?;
        tracing::debug!(%id, "DELETE /notes/{{id}}");
        let resp = self.client.delete(url).send().await?;
        match check_status(resp).await {
            Ok(_) => Ok(()),
            // Already gone on the server; the refetch will show that
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                tracing::warn!(%id, "note already deleted");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
