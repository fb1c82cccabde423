//! RSS 2.0 feed of the newest published articles.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::article::{Article, ArticleListFilter, ArticleReadRepository},
};

pub const FEED_ITEM_LIMIT: u32 = 20;
const DESCRIPTION_FALLBACK_CHARS: usize = 180;

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            title: "庭師、仕事を取りに行く。".to_string(),
            description: "個人宅専門・独立5カ月目の庭師による営業と実践の記録".to_string(),
            language: "ja".to_string(),
        }
    }
}

pub struct FeedQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
    settings: FeedSettings,
}

impl FeedQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            read_repo,
            clock,
            settings,
        }
    }

    /// Builds the feed document. `site_url` has no trailing slash.
    pub async fn rss(&self, site_url: &str) -> ApplicationResult<String> {
        let (articles, _) = self
            .read_repo
            .list_page(ArticleListFilter::published(), FEED_ITEM_LIMIT, None)
            .await?;
        Ok(self.render(site_url, &articles))
    }

    fn render(&self, site_url: &str, articles: &[Article]) -> String {
        // The base may come from a client-supplied Host header.
        let site_url = escape_text(site_url);
        let now = http_date(self.clock.now());
        let mut items = String::new();
        for article in articles {
            let link = format!("{site_url}/posts/{}", article.slug);
            let description = match &article.excerpt {
                Some(excerpt) => excerpt.as_str().trim().to_string(),
                None => truncate_chars(
                    &strip_markdown(article.body.as_str()),
                    DESCRIPTION_FALLBACK_CHARS,
                )
                .trim()
                .to_string(),
            };
            // Writing into a String cannot fail.
            let _ = write!(
                items,
                "
        <item>
            <title><![CDATA[{title}]]></title>
            <link>{link}</link>
            <guid isPermaLink=\"true\">{link}</guid>
            <pubDate>{pub_date}</pubDate>
            <description><![CDATA[{description}]]></description>
        </item>",
                title = escape_cdata(article.title.as_str()),
                pub_date = http_date(article.created_at),
                description = escape_cdata(&description),
            );
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
    <channel>
        <title>{title}</title>
        <link>{site_url}</link>
        <description>{description}</description>
        <language>{language}</language>
        <lastBuildDate>{now}</lastBuildDate>
        <atom:link href="{site_url}/rss.xml" rel="self" type="application/rss+xml" />{items}
    </channel>
</rss>"#,
            title = escape_text(&self.settings.title),
            description = escape_text(&self.settings.description),
            language = escape_text(&self.settings.language),
        )
    }
}

fn http_date(at: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(at))
}

/// Splits every `]]>` so the text can sit inside a CDATA section.
pub fn escape_cdata(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}

/// Escapes text for element content and double-quoted attribute values.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Rough plain-text rendition of Markdown for feed summaries.
///
/// Code is dropped, images vanish, links keep their label, and emphasis or
/// heading punctuation becomes whitespace.
pub fn strip_markdown(markdown: &str) -> String {
    let without_fences = remove_delimited(markdown, "```");
    let without_code = remove_delimited(&without_fences, "`");
    let without_links = strip_links(&without_code);

    let spaced: String = without_links
        .chars()
        .map(|c| match c {
            '#' | '>' | '*' | '_' | '~' | '-' => ' ',
            other => other,
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Removes each `delim ... delim` span; an unmatched opener is kept verbatim.
fn remove_delimited(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        let after_open = &rest[start + delim.len()..];
        match after_open.find(delim) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &after_open[end + delim.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

// `![alt](src)` is removed, `[label](href)` becomes `label`.
fn strip_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let is_image = rest[..open].ends_with('!');
        let Some((label, consumed)) = parse_link(&rest[open..]) else {
            out.push_str(&rest[..=open]);
            rest = &rest[open + 1..];
            continue;
        };
        if is_image {
            out.push_str(&rest[..open - 1]);
        } else {
            out.push_str(&rest[..open]);
            out.push_str(label);
        }
        rest = &rest[open + consumed..];
    }
    out.push_str(rest);
    out
}

// Parses `[label](target)` at the start of `text`, returning the label and the
// byte length of the whole construct.
fn parse_link(text: &str) -> Option<(&str, usize)> {
    let close = text.find(']')?;
    let label = &text[1..close];
    if label.contains('[') {
        return None;
    }
    let tail = &text[close + 1..];
    if !tail.starts_with('(') {
        return None;
    }
    let paren = tail.find(')')?;
    if paren == 1 {
        return None;
    }
    Some((label, close + 1 + paren + 1))
}
