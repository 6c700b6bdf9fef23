//! The notes page: input form plus the rendered note list.

use crate::controller::RenderedNote;
use crate::models::{EditingMode, FormState, Theme};
use crate::render::{html_escape, Markup};

use super::components::{base_html, flash_html};

/// Everything one page render needs.
pub struct PageView<'a> {
    pub notes: &'a [RenderedNote],
    pub form: &'a FormState,
    pub theme: Theme,
    pub search_query: Option<&'a str>,
    pub flash: Option<&'a str>,
}

// ============================================================================
// Note Form
// ============================================================================

/// The create/update form. The theme toggle lives inside it so toggling
/// re-posts the fields and nothing typed so far is lost.
pub fn note_form(form: &FormState, theme: Theme) -> Markup {
    let (editing_field, cancel_link) = match form.mode {
        EditingMode::Edit(id) => (
            format!(r#"<input type="hidden" name="editing_id" value="{}">"#, id),
            r#"<a href="/" class="cancel-edit">Cancel</a>"#,
        ),
        EditingMode::Create => (String::new(), ""),
    };

    Markup::trusted(format!(
        r#"<form id="note-form" class="note-form" action="/submit" method="post">
            {editing_field}
            <input type="text" id="note-title" name="title" placeholder="Title" value="{title}">
            <textarea id="note-content" name="content" placeholder="Write your note in markdown...">{content}</textarea>
            <div class="form-actions">
                <button type="submit" class="primary">{label}</button>
                {cancel_link}
                <span class="spacer"></span>
                <button type="submit" id="dark-mode-toggle" formaction="/theme" title="Toggle theme">{icon}</button>
            </div>
        </form>"#,
        editing_field = editing_field,
        title = html_escape(&form.title),
        content = html_escape(&form.content),
        label = form.submit_label(),
        cancel_link = cancel_link,
        icon = theme.toggle_icon(),
    ))
}

// ============================================================================
// Note List
// ============================================================================

fn note_html(note: &RenderedNote) -> String {
    let meta = note
        .updated_at
        .map(|t| format!(r#"<div class="meta">{}</div>"#, t.format("%Y-%m-%d %H:%M")))
        .unwrap_or_default();

    format!(
        r#"<div class="note" id="note-{id}">
            <h3>{title}</h3>
            {meta}
            <div class="content">{content}</div>
            <div class="actions">
                <form action="/edit" method="post">
                    <input type="hidden" name="id" value="{id}">
                    <input type="hidden" name="title" value="{raw_title}">
                    <input type="hidden" name="content" value="{raw_content}">
                    <button type="submit" class="edit">Edit</button>
                </form>
                <form action="/delete" method="post">
                    <input type="hidden" name="id" value="{id}">
                    <button type="submit" class="delete">Delete</button>
                </form>
            </div>
        </div>"#,
        id = note.id,
        title = note.title,
        meta = meta,
        content = note.content,
        raw_title = html_escape(&note.source_title),
        raw_content = html_escape(&note.source_content),
    )
}

pub fn notes_list(notes: &[RenderedNote]) -> Markup {
    if notes.is_empty() {
        return Markup::trusted(r#"<div id="notes-list" class="notes-list"><p class="empty">No notes.</p></div>"#);
    }

    let mut html = String::from(r#"<div id="notes-list" class="notes-list">"#);
    for note in notes {
        html.push_str(&note_html(note));
    }
    html.push_str("</div>");
    Markup::trusted(html)
}

// ============================================================================
// Full Page
// ============================================================================

pub fn render_page(view: &PageView<'_>) -> String {
    let heading = match view.search_query {
        Some(q) => format!("<h1>Search: \"{}\"</h1>", html_escape(q)),
        None => "<h1>Notes</h1>".to_string(),
    };

    let body = Markup::trusted(format!(
        "{flash}{form}{heading}{list}",
        flash = flash_html(view.flash),
        form = note_form(view.form, view.theme),
        heading = heading,
        list = notes_list(view.notes),
    ));

    base_html("Notes", &body, view.search_query, view.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;

    fn rendered(id: u64, title: &str, content: &str) -> RenderedNote {
        RenderedNote {
            id: NoteId::new(id).unwrap(),
            title: Markup::escape(title),
            content: Markup::markdown(content),
            source_title: title.to_string(),
            source_content: content.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_form_create_mode_has_no_editing_id() {
        let html = note_form(&FormState::blank(), Theme::Light).into_string();
        assert!(!html.contains("editing_id"));
        assert!(html.contains("Save Note"));
        assert!(html.contains("🌙"));
    }

    #[test]
    fn test_form_edit_mode_carries_id_and_label() {
        let form = FormState {
            mode: EditingMode::Edit(NoteId::new(7).unwrap()),
            title: "a \"quoted\" title".to_string(),
            content: "</textarea><script>x</script>".to_string(),
        };
        let html = note_form(&form, Theme::Dark).into_string();
        assert!(html.contains(r#"name="editing_id" value="7""#));
        assert!(html.contains("Update Note"));
        assert!(html.contains("a &quot;quoted&quot; title"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("☀️"));
    }

    #[test]
    fn test_list_keeps_order_and_actions() {
        let notes = vec![rendered(2, "second", "b"), rendered(1, "first", "a")];
        let html = notes_list(&notes).into_string();
        let pos2 = html.find(r#"id="note-2""#).unwrap();
        let pos1 = html.find(r#"id="note-1""#).unwrap();
        assert!(pos2 < pos1);
        assert_eq!(html.matches(r#"action="/delete""#).count(), 2);
        assert_eq!(html.matches(r#"action="/edit""#).count(), 2);
    }

    #[test]
    fn test_list_escapes_hidden_edit_fields() {
        let notes = vec![rendered(1, "it's", "\"><script>alert(1)</script>")];
        let html = notes_list(&notes).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"value="it&#39;s""#));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let html = notes_list(&[]).into_string();
        assert!(html.contains("No notes."));
    }

    #[test]
    fn test_page_shows_flash_and_search_heading() {
        let form = FormState::blank();
        let page = render_page(&PageView {
            notes: &[],
            form: &form,
            theme: Theme::Light,
            search_query: Some("<q>"),
            flash: Some("Network error"),
        });
        assert!(page.contains("Network error"));
        assert!(page.contains("Search: \"&lt;q&gt;\""));
    }
}
