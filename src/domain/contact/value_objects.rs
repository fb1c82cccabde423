// src/domain/contact/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub i64);

impl ContactId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("contact id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContactId> for i64 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

/// Visitor name written in Japanese script (hiragana, katakana, kanji).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if !value.chars().all(is_japanese_name_char) {
            return Err(DomainError::Validation(
                "name may only contain hiragana, katakana or kanji".into(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_japanese_name_char(c: char) -> bool {
    matches!(c, 'ぁ'..='ん' | 'ァ'..='ン' | '一'..='龥' | '\u{3000}')
}

/// Folds full-width ASCII and the ideographic space to their half-width forms.
pub fn fold_full_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c),
            '\u{3000}' => ' ',
            other => other,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = fold_full_width(value.as_ref()).trim().to_lowercase();
        if !is_plausible_email(&normalized) {
            return Err(DomainError::Validation("email address is invalid".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// local@domain where the domain has a dot with at least one char before it
// and at least two after it.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && domain[idx + 1..].chars().count() >= 2)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactComment(String);

impl ContactComment {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
