//! HTML templates and styling for the notes client.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constant with light and dark themes
//! - `components` - Shared HTML components (nav bar, error banner, base template)
//! - `page` - The note form and note list

mod styles;
mod components;
mod page;

pub use styles::STYLE;
pub use components::{base_html, flash_html, nav_bar};
pub use page::{note_form, notes_list, render_page, PageView};
