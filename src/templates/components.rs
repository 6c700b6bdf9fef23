//! Shared HTML components for the notes page.
//!
//! Contains the navigation bar (search box) and the base HTML template.

use crate::models::Theme;
use crate::render::{html_escape, Markup};

use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(search_query: Option<&str>) -> String {
    let query_val = search_query.unwrap_or("");

    format!(
        r#"<nav class="nav-bar">
            <a href="/">All notes</a>
            <span class="spacer"></span>
            <form class="search-box" action="/search" method="get">
                <input type="text" id="search" name="q" placeholder="Search..." value="{}">
                <button type="submit" id="search-button">Search</button>
            </form>
        </nav>"#,
        html_escape(query_val),
    )
}

// ============================================================================
// Error Banner
// ============================================================================

pub fn flash_html(message: Option<&str>) -> Markup {
    match message {
        Some(msg) => Markup::trusted(format!(
            r#"<div class="flash error" role="alert">{}</div>"#,
            Markup::escape(msg)
        )),
        None => Markup::default(),
    }
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &Markup, search_query: Option<&str>, theme: Theme) -> String {
    let body_class = match theme {
        Theme::Dark => r#" class="dark-mode""#,
        Theme::Light => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body data-theme="{theme}"{body_class}>
    {nav}
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        STYLE = STYLE,
        theme = theme.as_str(),
        body_class = body_class,
        nav = nav_bar(search_query),
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_escapes_query() {
        let html = nav_bar(Some(r#""><script>x</script>"#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_base_html_sets_theme() {
        let dark = base_html("Notes", &Markup::default(), None, Theme::Dark);
        assert!(dark.contains(r#"<body data-theme="dark" class="dark-mode">"#));
        let light = base_html("Notes", &Markup::default(), None, Theme::Light);
        assert!(light.contains(r#"<body data-theme="light">"#));
    }

    #[test]
    fn test_flash_is_escaped() {
        assert_eq!(flash_html(None), Markup::default());
        let html = flash_html(Some("<b>boom</b>"));
        assert!(html.as_str().contains("&lt;b&gt;boom&lt;/b&gt;"));
    }
}
