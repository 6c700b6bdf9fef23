//! Base URL validation for the remote note store.
//!
//! The store's base URL comes from configuration, so it is checked once at
//! startup:
//! - the scheme must be `http` or `https`
//! - a host is required
//! - query strings and fragments are rejected (they would be silently dropped
//!   or mangled by path joins)
//!
//! The returned URL always ends in `/` so that relative joins such as
//! `notes/7` extend the base path instead of replacing its last segment.

use url::Url;

use crate::models::NoteId;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    /// URL is malformed or cannot be parsed
    InvalidUrl(String),
    /// URL uses a scheme other than http/https
    UnsupportedScheme(String),
    /// URL carries a query string or fragment
    UnexpectedComponent(&'static str),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlValidationError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            UrlValidationError::UnsupportedScheme(scheme) => {
                write!(f, "Only http and https URLs are allowed, got {}", scheme)
            }
            UrlValidationError::UnexpectedComponent(part) => {
                write!(f, "Base URL must not contain a {}", part)
            }
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Validate and normalize the store's base URL.
///
/// # Arguments
/// * `url_str` - The configured base URL, e.g. `https://example.com/api`
///
/// # Returns
/// * `Ok(Url)` - The parsed URL with a trailing `/` on its path
/// * `Err(UrlValidationError)` - If validation fails
pub fn validate_base_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let mut url =
        Url::parse(url_str.trim()).map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(UrlValidationError::UnsupportedScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlValidationError::InvalidUrl("No host in URL".to_string()));
    }

    if url.query().is_some() {
        return Err(UrlValidationError::UnexpectedComponent("query string"));
    }
    if url.fragment().is_some() {
        return Err(UrlValidationError::UnexpectedComponent("fragment"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// `{base}notes`
pub fn notes_url(base: &Url) -> Result<Url, UrlValidationError> {
    base.join("notes")
        .map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))
}

/// `{base}notes/{id}`
pub fn note_url(base: &Url, id: NoteId) -> Result<Url, UrlValidationError> {
    base.join(&format!("notes/{}", id))
        .map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))
}
