// src/application/ports/markdown.rs

/// Markdown to trusted HTML.
///
/// Implementations must not fail for any input: malformed Markdown degrades to
/// literal text, and anything the sanitizer removes is simply absent from the
/// output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
