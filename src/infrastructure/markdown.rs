//! Markdown rendering for article bodies and the editor preview.
//!
//! Parsing is permissive (GFM extras, raw HTML passed through) and safety comes
//! entirely from the sanitizer pass that follows.

use std::borrow::Cow;

use ammonia::Builder;
use comrak::{ExtensionOptions, Options, ParseOptions, RenderOptions, markdown_to_html};

use crate::application::ports::markdown::MarkdownRenderer;

const LINK_REL: &str = "noopener noreferrer";
const ALLOWED_TARGETS: [&str; 4] = ["_blank", "_self", "_parent", "_top"];
const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// `Options` itself is not `Sync` (it can hold a parse callback), so only the
/// callback-free halves are kept.
pub struct SanitizingMarkdownRenderer {
    extension: ExtensionOptions,
    render: RenderOptions,
    sanitizer: Builder<'static>,
}

impl Default for SanitizingMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizingMarkdownRenderer {
    pub fn new() -> Self {
        let mut extension = ExtensionOptions::default();
        extension.strikethrough = true;
        extension.table = true;
        extension.autolink = true;
        // Headings carry an anchor link: `<a class="anchor" id=".." href="#..">`.
        extension.header_ids = Some(String::new());

        let mut render = RenderOptions::default();
        render.hardbreaks = true;
        // Raw HTML reaches the sanitizer instead of being replaced by comments.
        render.unsafe_ = true;

        let mut sanitizer = Builder::default();
        sanitizer
            .add_tag_attributes("a", &["target", "id", "aria-hidden"])
            .add_allowed_classes("a", &["anchor"])
            .attribute_filter(|element, attribute, value| {
                if element == "a" && attribute == "target" {
                    return ALLOWED_TARGETS
                        .contains(&value)
                        .then(|| Cow::Owned(value.to_string()));
                }
                Some(Cow::Owned(value.to_string()))
            })
            .link_rel(Some(LINK_REL));
        for heading in HEADINGS {
            sanitizer.add_tag_attributes(heading, &["id"]);
        }
        Self {
            extension,
            render,
            sanitizer,
        }
    }

    /// Runs the allow-list over arbitrary HTML. Stable on its own output.
    pub fn sanitize(&self, html: &str) -> String {
        self.sanitizer.clean(html).to_string()
    }

    fn options(&self) -> Options<'_> {
        Options {
            extension: self.extension.clone(),
            parse: ParseOptions::default(),
            render: self.render,
        }
    }
}

impl MarkdownRenderer for SanitizingMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        if markdown.trim().is_empty() {
            return String::new();
        }
        let html = markdown_to_html(markdown, &self.options());
        self.sanitize(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> String {
        SanitizingMarkdownRenderer::new().render(md)
    }

    #[test]
    fn script_blocks_are_removed() {
        let html = render("hello\n\n<script>alert('x')</script>\n\nworld");
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("hello"));
        assert!(html.contains("world"));
    }

    #[test]
    fn inline_event_handlers_are_removed() {
        let html = render(r#"<img src="https://example.com/a.png" onerror="alert(1)"> <b onclick="x()">b</b>"#);
        assert!(!html.contains("onerror"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("<b>b</b>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert!(render("").trim().is_empty());
        assert!(render("   \n ").trim().is_empty());
    }

    #[test]
    fn single_newline_becomes_line_break() {
        let html = render("line1\nline2");
        assert!(html.contains("line1<br>"), "{html}");
        assert!(html.contains("line2"));
    }

    #[test]
    fn fenced_code_is_escaped_not_interpreted() {
        let html = render("```html\n<b>**not bold**</b>\n```");
        assert!(html.contains("<pre><code>"), "{html}");
        assert!(html.contains("&lt;b&gt;**not bold**&lt;/b&gt;"), "{html}");
    }

    #[test]
    fn unterminated_fence_still_renders_code_block() {
        let html = render("```\nlet x = 1;");
        assert!(html.contains("<pre><code>"), "{html}");
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        let renderer = SanitizingMarkdownRenderer::new();
        let once = renderer.render(
            "# 見出し\n\n[link](https://example.com) <a href=\"/x\" target=\"_blank\">t</a>\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~",
        );
        assert_eq!(renderer.sanitize(&once), once);
    }

    #[test]
    fn headings_keep_their_anchor() {
        let renderer = SanitizingMarkdownRenderer::new();
        let html = renderer.render("# 見出し\n\n## 見出し\n\n### Care & Feeding");
        assert!(html.contains(r#"id="見出し""#), "{html}");
        assert!(html.contains(r##"href="#見出し""##), "{html}");
        assert!(html.contains(r#"class="anchor""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
        assert!(html.contains(r#"id="見出し-1""#), "{html}");
        assert!(html.contains(r#"id="care--feeding""#), "{html}");
        assert_eq!(renderer.sanitize(&html), html);
    }

    #[test]
    fn foreign_classes_and_heading_attributes_are_dropped() {
        let html = render(concat!(
            r#"<a href="/x" class="anchor evil">a</a>"#,
            "\n\n",
            r#"<h2 id="ok" style="color:red" onclick="x()">t</h2>"#,
        ));
        assert!(!html.contains("evil"), "{html}");
        assert!(html.contains(r#"<h2 id="ok">t</h2>"#), "{html}");
    }

    #[test]
    fn javascript_urls_are_dropped() {
        let html = render("[click](javascript:alert(1)) <a href=\"javascript:void(0)\">x</a>");
        assert!(!html.contains("javascript:"), "{html}");
    }

    #[test]
    fn links_get_forced_rel_and_filtered_target() {
        let html = render(
            r#"<a href="https://example.com" target="_blank" rel="opener">ok</a> <a href="https://example.com" target="evil">bad</a>"#,
        );
        assert!(html.contains(r#"target="_blank""#), "{html}");
        assert!(!html.contains("evil"), "{html}");
        assert!(!html.contains(r#"rel="opener""#), "{html}");
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2, "{html}");
    }

    #[test]
    fn gfm_extensions_are_enabled() {
        let html = render("~~gone~~ https://example.com\n\n| a |\n|---|\n| 1 |");
        assert!(html.contains("<del>gone</del>"), "{html}");
        assert!(html.contains(r#"href="https://example.com""#), "{html}");
        assert!(html.contains("<table>"), "{html}");
    }
}
