use crate::application::ports::util::SlugGenerator;
use unicode_normalization::UnicodeNormalization;

/// Keeps Japanese script in slugs so titles like 「剪定のコツ」 stay readable in URLs.
///
/// Lower-cases, turns whitespace runs into `-`, drops everything except ASCII
/// word characters, `-`, kanji, hiragana, katakana and the prolonged sound mark,
/// then collapses and trims hyphens.
#[derive(Default, Clone)]
pub struct UnicodeSlugGenerator;

impl SlugGenerator for UnicodeSlugGenerator {
    fn slugify(&self, title: &str) -> String {
        let lowered: String = title.nfc().collect::<String>().to_lowercase();

        let mut slug = String::with_capacity(lowered.len());
        let mut pending_hyphen = false;
        for c in lowered.trim().chars() {
            if c.is_whitespace() || c == '-' {
                pending_hyphen = true;
                continue;
            }
            if !is_slug_char(c) {
                continue;
            }
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
        slug
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || matches!(c, '一'..='龠' | 'ぁ'..='ん' | 'ァ'..='ヶ' | 'ー')
}

/// ASCII-only slugs via transliteration (`東京` becomes `dong-jing`).
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, title: &str) -> String {
        slug::slugify(title)
    }
}
