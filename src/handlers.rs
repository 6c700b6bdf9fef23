//! HTTP route handlers for the notes page.
//!
//! Each handler maps one user gesture onto a controller call and re-renders
//! the whole page. The editing mode travels in the `editing_id` hidden field,
//! so the server keeps no per-user form state.

use axum::{
    extract::{Form, Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::controller::NoteListController;
use crate::error::ClientError;
use crate::models::{EditingMode, FormState, NoteId};
use crate::templates::{render_page, PageView};
use crate::AppState;

// ============================================================================
// Form Payloads
// ============================================================================

/// Fields of the note form, posted to `/submit` and `/theme`.
#[derive(Debug, Deserialize)]
pub struct NoteFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub editing_id: Option<String>,
}

impl NoteFormData {
    pub fn into_form_state(self) -> FormState {
        let mode = match self.editing_id.as_deref().map(str::parse::<NoteId>) {
            Some(Ok(id)) => EditingMode::Edit(id),
            Some(Err(_)) => {
                tracing::warn!(editing_id = ?self.editing_id, "ignoring invalid editing id");
                EditingMode::Create
            }
            None => EditingMode::Create,
        };
        FormState {
            mode,
            title: self.title,
            content: self.content,
        }
    }
}

/// Hidden fields carried by a note's Edit button.
#[derive(Debug, Deserialize)]
pub struct EditFormData {
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteFormData {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

fn parse_id(raw: Option<&str>) -> Option<NoteId> {
    raw.and_then(|s| s.parse().ok())
}

fn page(
    ctl: &NoteListController,
    form: &FormState,
    search_query: Option<&str>,
    error: Option<&ClientError>,
) -> Html<String> {
    let flash = error.map(|e| e.to_string());
    let notes = ctl.rendered();
    Html(render_page(&PageView {
        notes: &notes,
        form,
        theme: ctl.theme(),
        search_query,
        flash: flash.as_deref(),
    }))
}

// ============================================================================
// Listing
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let ctl = &state.controller;
    let result = ctl.fetch_notes().await;
    page(ctl, &FormState::blank(), None, result.as_ref().err())
}

pub async fn search(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let q = query.q.unwrap_or_default();
    let ctl = &state.controller;
    let result = ctl.search(&q).await;

    let shown_query = Some(q.trim()).filter(|q| !q.is_empty());
    page(ctl, &FormState::blank(), shown_query, result.as_ref().err())
}

// ============================================================================
// Mutations
// ============================================================================

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(data): Form<NoteFormData>,
) -> Html<String> {
    let ctl = &state.controller;
    let (next, result) = ctl.submit(data.into_form_state()).await;
    page(ctl, &next, None, result.as_ref().err())
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Form(data): Form<EditFormData>,
) -> Html<String> {
    let ctl = &state.controller;
    match parse_id(data.id.as_deref()) {
        Some(id) => {
            let form = ctl.edit_note(id, &data.title, &data.content);
            page(ctl, &form, None, None)
        }
        None => {
            tracing::error!(id = ?data.id, "edit requested without a note ID");
            page(ctl, &FormState::blank(), None, Some(&ClientError::MissingNoteId))
        }
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Form(data): Form<DeleteFormData>,
) -> Html<String> {
    let ctl = &state.controller;
    let result = ctl.delete_note(parse_id(data.id.as_deref())).await;
    page(ctl, &FormState::blank(), None, result.as_ref().err())
}

// ============================================================================
// Display Settings
// ============================================================================

/// Flip the theme and show the page again with the form exactly as posted.
pub async fn toggle_theme(
    State(state): State<Arc<AppState>>,
    Form(data): Form<NoteFormData>,
) -> Html<String> {
    let ctl = &state.controller;
    let theme = ctl.toggle_theme();
    tracing::debug!(theme = theme.as_str(), "theme toggled");
    page(ctl, &data.into_form_state(), None, None)
}
