//! Notes client - a local page over a remote `/notes` store.
//!
//! The application is organized into the following modules:
//!
//! - `models`: Notes, editing mode, form state and theme
//! - `api`: The `NoteStore` trait and its reqwest implementation
//! - `controller`: The note list controller
//! - `render`: HTML escaping and sanitized markdown
//! - `templates`: Page layout, note list, form and styles
//! - `handlers`: HTTP route handlers

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_client::{app, AppState, Config, HttpNoteStore};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notes_client=info,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = HttpNoteStore::new(config.api_url.clone(), config.request_timeout)?;
    let state = Arc::new(AppState::new(Box::new(store)));

    let router = app(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Notes client running at http://{}", config.bind_addr);
    tracing::info!("Note store: {}", config.api_url);

    axum::serve(listener, router).await?;
    Ok(())
}
