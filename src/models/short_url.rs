// src/models/short_url.rs - Pure data structures
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Path prefix under which short keys are served
pub const SHORT_PATH_PREFIX: &str = "/short/";

/// Form body posted to `/shortn`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenForm {
    /// The original URL, kept exactly as submitted
    #[serde(default)]
    #[validate(length(min = 1, message = "No Url Found"))]
    pub url: String,
}

/// A stored mapping from a short key to the original URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub short_key: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(short_key: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            original_url: original_url.into(),
            created_at: Utc::now(),
        }
    }

    /// Relative path that redirects to the original URL
    pub fn short_path(&self) -> String {
        format!("{}{}", SHORT_PATH_PREFIX, self.short_key)
    }
}

/// Values rendered into the confirmation page
#[derive(Debug, Serialize)]
pub struct ShortenedView {
    #[serde(rename = "OriginalURL")]
    pub original_url: String,
    #[serde(rename = "ShortenURL")]
    pub shorten_url: String,
}

impl From<Entry> for ShortenedView {
    fn from(entry: Entry) -> Self {
        ShortenedView {
            shorten_url: entry.short_path(),
            original_url: entry.original_url,
        }
    }
}

/// One row of the listing on the form page
#[derive(Debug, Serialize)]
pub struct EntryRow {
    #[serde(rename = "ShortKey")]
    pub short_key: String,
    #[serde(rename = "OriginalURL")]
    pub original_url: String,
    #[serde(rename = "ShortenURL")]
    pub shorten_url: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
}

impl From<Entry> for EntryRow {
    fn from(entry: Entry) -> Self {
        EntryRow {
            shorten_url: entry.short_path(),
            created_at: entry.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            short_key: entry.short_key,
            original_url: entry.original_url,
        }
    }
}

/// Values rendered into the form page
#[derive(Debug, Serialize)]
pub struct IndexView {
    #[serde(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Entries")]
    pub entries: Vec<EntryRow>,
}

impl From<Vec<Entry>> for IndexView {
    fn from(entries: Vec<Entry>) -> Self {
        IndexView {
            count: entries.len(),
            entries: entries.into_iter().map(EntryRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path() {
        let entry = Entry::new("aB3dE6gH", "https://example.com");
        assert_eq!(entry.short_path(), "/short/aB3dE6gH");
    }

    #[test]
    fn test_view_from_entry() {
        let view = ShortenedView::from(Entry::new("Zz99Zz99", "https://example.com/a?b=c"));
        assert_eq!(view.original_url, "https://example.com/a?b=c");
        assert_eq!(view.shorten_url, "/short/Zz99Zz99");
    }

    #[test]
    fn test_index_view_rows() {
        let view = IndexView::from(vec![
            Entry::new("aaaaaaaa", "https://a.example"),
            Entry::new("bbbbbbbb", "https://b.example"),
        ]);
        assert_eq!(view.count, 2);
        assert_eq!(view.entries[1].shorten_url, "/short/bbbbbbbb");
        assert_eq!(view.entries[0].original_url, "https://a.example");
    }

    #[test]
    fn test_form_validation() {
        assert!(ShortenForm { url: String::new() }.validate().is_err());
        // Anything non-empty is accepted verbatim, no URL parsing
        assert!(ShortenForm { url: "not a url".into() }.validate().is_ok());
        assert!(ShortenForm { url: " ".into() }.validate().is_ok());
    }
}
