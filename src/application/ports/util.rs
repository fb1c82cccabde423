// src/application/ports/util.rs

/// Derives a URL segment from an article title.
///
/// The result may be empty (e.g. a title made only of punctuation); callers
/// decide on a fallback.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
