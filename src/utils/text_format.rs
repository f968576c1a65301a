//! Escaping and light formatting for stored text content.
//!
//! Text snippets are always HTML-escaped before rendering. When the content
//! looks structured (Markdown-ish markers), a minimal line-based formatter
//! upgrades headings, lists, blockquotes, code fences, and inline emphasis;
//! otherwise the snippet renders verbatim inside a `<pre>` block. This is
//! cosmetic rendering, not a Markdown implementation.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of characters shown in preview mode.
pub const PREVIEW_LENGTH: usize = 200;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+\S").unwrap());
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s+\S").unwrap());
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s?").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^```").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*|__[^_]+__|\*[^*\s][^*]*\*").unwrap());

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*)\*").unwrap());

/// Returns true when the content carries structural markers.
///
/// Each pattern is checked independently; a single match is enough.
pub fn looks_structured(content: &str) -> bool {
    HEADING.is_match(content)
        || LIST_ITEM.is_match(content)
        || BLOCKQUOTE.is_match(content)
        || CODE_FENCE.is_match(content)
        || EMPHASIS.is_match(content)
}

/// Escapes the HTML-significant characters in `text`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders text content to a safe HTML fragment.
///
/// Escapes first, then either wraps the whole snippet in `<pre>` or applies
/// the light structural formatting when [`looks_structured`] fires.
pub fn render_text(content: &str) -> String {
    if looks_structured(content) {
        render_structured(content)
    } else {
        format!("<pre>{}</pre>", escape_html(content))
    }
}

/// Truncates content for preview rendering, appending an ellipsis when cut.
pub fn preview_text(content: &str) -> String {
    if content.chars().count() <= PREVIEW_LENGTH {
        content.to_string()
    } else {
        let cut: String = content.chars().take(PREVIEW_LENGTH).collect();
        format!("{cut}…")
    }
}

fn render_inline(escaped: &str) -> String {
    let bolded = BOLD.replace_all(escaped, "<strong>$1</strong>");
    ITALIC.replace_all(&bolded, "<em>$1</em>").into_owned()
}

/// Strips a `1. ` style prefix, returning the item text.
fn ordered_item(trimmed: &str) -> Option<&str> {
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix(". ").map(str::trim_start)
}

fn close_list(html: &mut String, list_tag: &mut Option<&str>) {
    if let Some(tag) = list_tag.take() {
        html.push_str(&format!("</{tag}>\n"));
    }
}

fn render_structured(content: &str) -> String {
    let mut html = String::new();
    let mut in_code = false;
    // "ul" or "ol" while a list is open.
    let mut list_tag: Option<&str> = None;

    for line in content.lines() {
        let escaped = escape_html(line);

        if line.trim_start().starts_with("```") {
            close_list(&mut html, &mut list_tag);
            html.push_str(if in_code { "</code></pre>\n" } else { "<pre><code>" });
            in_code = !in_code;
            continue;
        }

        if in_code {
            html.push_str(&escaped);
            html.push('\n');
            continue;
        }

        let trimmed = line.trim_start();

        if let Some(rest) = trimmed.strip_prefix('#') {
            let level = 1 + rest.chars().take_while(|&c| c == '#').count();
            let level = level.min(6);
            let text = trimmed.trim_start_matches('#').trim();
            if !text.is_empty() {
                close_list(&mut html, &mut list_tag);
                html.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    render_inline(&escape_html(text))
                ));
                continue;
            }
        }

        let is_bullet = trimmed.starts_with("- ")
            || trimmed.starts_with("* ")
            || trimmed.starts_with("+ ");
        let item = if is_bullet {
            Some(("ul", &trimmed[2..]))
        } else {
            ordered_item(trimmed).map(|text| ("ol", text))
        };
        if let Some((tag, text)) = item {
            if list_tag != Some(tag) {
                close_list(&mut html, &mut list_tag);
                html.push_str(&format!("<{tag}>\n"));
                list_tag = Some(tag);
            }
            html.push_str(&format!("<li>{}</li>\n", render_inline(&escape_html(text))));
            continue;
        }
        close_list(&mut html, &mut list_tag);

        if let Some(rest) = trimmed.strip_prefix('>') {
            html.push_str(&format!(
                "<blockquote>{}</blockquote>\n",
                render_inline(&escape_html(rest.trim_start()))
            ));
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        html.push_str(&format!("<p>{}</p>\n", render_inline(&escaped)));
    }

    close_list(&mut html, &mut list_tag);
    if in_code {
        html.push_str("</code></pre>\n");
    }

    html
}
