//! CSS styles for the notes page.
//!
//! Contains the STYLE constant. Both themes share one stylesheet; the dark
//! palette is selected by `data-theme="dark"` on `<body>`.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

/* Solarized Dark Theme */
body[data-theme="dark"] {
    --bg: var(--base03);
    --fg: var(--base0);
    --muted: var(--base01);
    --border: var(--base02);
    --accent: var(--base02);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1.5em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}

.nav-bar .spacer { flex: 1; }

.search-box { display: flex; gap: 0.5rem; }

input[type="text"], textarea {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-size: 0.9rem;
    font-family: inherit;
}

.search-box input { width: 180px; }

button, .btn {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.9rem;
    font-family: inherit;
}

button.primary { background: var(--link); color: white; border-color: var(--link); }
button.delete { color: var(--red); }

.flash {
    padding: 0.5rem 0.75rem;
    margin: 1rem 0;
    border-radius: 4px;
    border: 1px solid var(--red);
    color: var(--red);
    font-size: 0.9rem;
}

.note-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin: 1rem 0 2rem;
}
.note-form textarea { min-height: 8rem; resize: vertical; }
.note-form .form-actions { display: flex; gap: 0.5rem; align-items: center; }

.notes-list { display: flex; flex-direction: column; gap: 1rem; }

.note {
    border: 1px solid var(--border);
    border-radius: 4px;
    padding: 0.75rem 1rem;
}
.note h3 { margin-top: 0; }
.note .meta { font-size: 0.8rem; color: var(--muted); }
.note .actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
.note .actions form { display: inline; }

.note .content pre {
    background: var(--accent);
    padding: 1rem;
    overflow-x: auto;
    border-radius: 4px;
    margin: 1rem 0;
}
.note .content code {
    font-family: "SF Mono", "Consolas", "Liberation Mono", monospace;
    font-size: 0.9em;
}
.note .content blockquote {
    border-left: 3px solid var(--border);
    margin: 1rem 0;
    padding-left: 1rem;
    color: var(--muted);
}
.note .content ul, .note .content ol { margin: 0.5rem 0; padding-left: 1.5rem; }
.note .content p { margin: 0.5rem 0; }

.empty { color: var(--muted); font-style: italic; }
"#;
