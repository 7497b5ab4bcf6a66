use leptos::prelude::*;

use enhancer_app::domain::EnhancedPrompt;

/// Success rendering. The same string feeds the formatted block and the
/// copyable read-only field.
#[component]
pub fn ResultDisplay(enhanced: EnhancedPrompt) -> impl IntoView {
    let text = enhanced.text;
    let html_content = markdown_to_html(&text);

    view! {
        <div class="result">
            <p class="result__banner">"Prompt enhanced successfully!"</p>
            <h2 class="result__title">"Enhanced Prompt:"</h2>
            <div class="result__content" inner_html=html_content></div>
            <label class="result__copy-label" for="copy-field">"Copy this enhanced prompt"</label>
            <textarea id="copy-field" class="result__copy-field" readonly>{text}</textarea>
        </div>
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Just enough markdown for completion output: headings, list items,
/// paragraphs, and bold/italic emphasis. Input is escaped before our own
/// tags are added.
pub fn markdown_to_html(text: &str) -> String {
    let mut html = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            html.push_str(&format!("<h4>{}</h4>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            html.push_str(&format!("<h3>{}</h3>", render_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            html.push_str(&format!("<li>{}</li>", render_inline(rest)));
        } else {
            html.push_str(&format!("<p>{}</p>", render_inline(line)));
        }
    }

    html
}

fn render_inline(text: &str) -> String {
    let mut html = escape_html(text);
    for (marker, tag) in [("**", "strong"), ("__", "strong"), ("*", "em"), ("_", "em")] {
        html = toggle_pairs(&html, marker, tag);
    }
    html
}

// Each occurrence of the marker alternates between an opening and a closing
// tag; a dangling open tag is closed at the end of the line.
fn toggle_pairs(text: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut open = false;

    while let Some(idx) = rest.find(marker) {
        out.push_str(&rest[..idx]);
        if open {
            out.push_str("</");
        } else {
            out.push('<');
        }
        out.push_str(tag);
        out.push('>');
        open = !open;
        rest = &rest[idx + marker.len()..];
    }
    out.push_str(rest);

    if open {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_headings() {
        let html = markdown_to_html("# Title\n\nSome text\n## Sub");
        assert_eq!(html, "<h3>Title</h3><p>Some text</p><h4>Sub</h4>");
    }

    #[test]
    fn test_list_items() {
        let html = markdown_to_html("- first\n* second");
        assert_eq!(html, "<li>first</li><li>second</li>");
    }

    #[test]
    fn test_bold_and_italic_pairs() {
        assert_eq!(
            markdown_to_html("**bold** and *soft*"),
            "<p><strong>bold</strong> and <em>soft</em></p>"
        );
    }

    #[test]
    fn test_dangling_marker_is_closed() {
        assert_eq!(markdown_to_html("**loud"), "<p><strong>loud</strong></p>");
    }

    #[test]
    fn test_markup_in_completion_text_is_escaped() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html_order() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
    }
}
