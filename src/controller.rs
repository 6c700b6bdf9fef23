//! The note list controller.
//!
//! Owns the rendered list (always the result of the last successful fetch)
//! and the display theme. The editing mode is not stored here: it lives in
//! [`FormState`], which callers pass into [`NoteListController::submit`] and
//! get back from it.
//!
//! The view lock is only taken between network calls, never across one, so
//! local actions (theme toggle, edit) never wait on the remote store. When two
//! fetches overlap, whichever finishes last is what stays on screen.

use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::NoteStore;
use crate::error::ClientError;
use crate::models::{EditingMode, FormState, Note, NoteId, NotePayload, Theme};
use crate::render::Markup;

/// A note ready for the page. Built only by [`NoteListController::display_notes`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNote {
    pub id: NoteId,
    pub title: Markup,
    pub content: Markup,
    /// Raw values carried by the Edit action to repopulate the form.
    pub source_title: String,
    pub source_content: String,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct View {
    rendered: Vec<RenderedNote>,
    theme: Theme,
}

pub struct NoteListController {
    store: Box<dyn NoteStore>,
    view: Mutex<View>,
}

impl NoteListController {
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        Self {
            store,
            view: Mutex::new(View::default()),
        }
    }

    fn view(&self) -> MutexGuard<'_, View> {
        // View updates are plain assignments, so a panicked holder leaves it consistent
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the rendered list.
    pub fn rendered(&self) -> Vec<RenderedNote> {
        self.view().rendered.clone()
    }

    pub fn theme(&self) -> Theme {
        self.view().theme
    }

    // ========================================================================
    // Fetching and display
    // ========================================================================

    /// Fetch every note and replace the rendered list. On failure the
    /// previous list stays on screen.
    pub async fn fetch_notes(&self) -> Result<usize, ClientError> {
        self.load(None).await
    }

    /// Same as [`fetch_notes`](Self::fetch_notes) but filtered by the store.
    /// A blank query is sent as a plain listing.
    pub async fn search(&self, query: &str) -> Result<usize, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            self.load(None).await
        } else {
            self.load(Some(query)).await
        }
    }

    async fn load(&self, query: Option<&str>) -> Result<usize, ClientError> {
        match self.store.list(query).await {
            Ok(notes) => {
                let shown = self.display_notes(notes);
                tracing::info!(shown, query = ?query, "notes loaded");
                Ok(shown)
            }
            Err(e) => {
                tracing::error!(error = %e, query = ?query, "failed to fetch notes");
                Err(e)
            }
        }
    }

    /// Clear the rendered list and render `notes` in order, skipping any note
    /// without an id. Returns how many were rendered.
    pub fn display_notes(&self, notes: Vec<Note>) -> usize {
        let mut rendered = Vec::with_capacity(notes.len());

        for note in notes {
            let Some(id) = note.id() else {
                tracing::warn!(title = %note.title, "note ID is undefined, skipping");
                continue;
            };
            rendered.push(RenderedNote {
                id,
                title: Markup::escape(&note.title),
                content: Markup::markdown(&note.content),
                source_title: note.title,
                source_content: note.content,
                updated_at: note.updated_at.or(note.created_at),
            });
        }

        let shown = rendered.len();
        self.view().rendered = rendered;
        shown
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create or update a note depending on `form.mode`.
    ///
    /// Returns the form to show next. After a successful write that is a
    /// blank create-mode form and the list has been refetched (the result
    /// reports the refetch). If the write itself fails the same form comes
    /// back untouched and nothing is refetched.
    pub async fn submit(&self, form: FormState) -> (FormState, Result<usize, ClientError>) {
        let payload = match NotePayload::new(&form.title, &form.content) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "rejected note before sending");
                return (form, Err(e));
            }
        };

        let written = match form.mode {
            EditingMode::Edit(id) => self.store.update(id, &payload).await,
            EditingMode::Create => self.store.create(&payload).await,
        };

        if let Err(e) = written {
            tracing::error!(error = %e, mode = ?form.mode, "failed to save note");
            return (form, Err(e));
        }

        (FormState::blank(), self.fetch_notes().await)
    }

    /// Put the form into edit mode for `id`. No network call.
    pub fn edit_note(&self, id: NoteId, title: &str, content: &str) -> FormState {
        FormState {
            mode: EditingMode::Edit(id),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Delete a note and refetch. A missing id aborts before any request.
    pub async fn delete_note(&self, id: Option<NoteId>) -> Result<usize, ClientError> {
        tracing::debug!(id = ?id, "deleting note");
        let Some(id) = id else {
            tracing::error!("note ID is undefined, delete aborted");
            return Err(ClientError::MissingNoteId);
        };

        if let Err(e) = self.store.delete(id).await {
            tracing::error!(error = %e, %id, "failed to delete note");
            return Err(e);
        }

        self.fetch_notes().await
    }

    // ========================================================================
    // Display settings
    // ========================================================================

    pub fn toggle_theme(&self) -> Theme {
        let mut view = self.view();
        view.theme = view.theme.toggled();
        view.theme
    }
}
