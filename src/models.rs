//! Data models for the notes client.
//!
//! This module contains the wire types exchanged with the remote `/notes`
//! store, plus the client-local view state: the editing mode, the input form
//! and the display theme.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

// ============================================================================
// Core Note Types
// ============================================================================

/// Server-assigned note identifier. Always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Returns `None` for `0`, which the server uses as its "unset" value.
    pub fn new(raw: u64) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(NoteId::new)
            .ok_or(ClientError::MissingNoteId)
    }
}

/// A note as returned by `GET /notes`.
///
/// The server serializes its model with Go field names (`ID`, `CreatedAt`,
/// `UpdatedAt`), so those are the primary names here; lowercase `id` is
/// accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "ID", alias = "id", default)]
    pub raw_id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "CreatedAt", alias = "created_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "UpdatedAt", alias = "updated_at", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn id(&self) -> Option<NoteId> {
        self.raw_id.and_then(NoteId::new)
    }
}

/// Request body for `POST /notes` and `PUT /notes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

impl NotePayload {
    /// The store rejects empty titles and bodies, so we refuse to send them.
    /// Whitespace counts as content, as it does on the server.
    pub fn new(title: &str, content: &str) -> Result<Self, ClientError> {
        if title.is_empty() {
            return Err(ClientError::Validation("title is required".to_string()));
        }
        if content.is_empty() {
            return Err(ClientError::Validation("content is required".to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

// ============================================================================
// Editing State
// ============================================================================

/// Whether the next submit creates a note or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingMode {
    #[default]
    Create,
    Edit(NoteId),
}

/// The input form together with the mode it will be submitted in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: EditingMode,
    pub title: String,
    pub content: String,
}

impl FormState {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditingMode::Create => "Save Note",
            EditingMode::Edit(_) => "Update Note",
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the `data-theme` attribute on `<body>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}
