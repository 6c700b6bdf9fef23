//! Notes client library - re-exports for testing and external use.
//!
//! A server-rendered page over a remote `/notes` REST store. The binary in
//! `main.rs` wires these modules into an axum app.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod templates;
pub mod url_validator;

// ============================================================================
// Application State
// ============================================================================

/// Shared between handlers. The controller guards its own view state, so
/// handlers call it concurrently.
pub struct AppState {
    pub controller: NoteListController,
}

impl AppState {
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        Self {
            controller: NoteListController::new(store),
        }
    }
}

/// Router with every page route, ready for `axum::serve`.
pub fn app(state: Arc<AppState>) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/submit", post(handlers::submit))
        .route("/edit", post(handlers::edit))
        .route("/delete", post(handlers::delete))
        .route("/theme", post(handlers::toggle_theme))
        .with_state(state)
}

// Re-export commonly used types
pub use api::{HttpNoteStore, NoteStore};
pub use config::Config;
pub use controller::{NoteListController, RenderedNote};
pub use error::{ClientError, ConfigError};
pub use models::{EditingMode, FormState, Note, NoteId, NotePayload, Theme};
pub use render::{html_escape, render_markdown, Markup};
pub use templates::{render_page, PageView};
pub use url_validator::{validate_base_url, UrlValidationError};
