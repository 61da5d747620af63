use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";
const MISSING_FIELD: &str = "Missing";

/// Snapshot of a catalog volume as shown in result lists. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail_url: Option<String>,
}

impl BookSummary {
    /// Authors joined for display, "Unknown" when the catalog has none
    pub fn authors_display(&self) -> String {
        join_or(&self.authors, UNKNOWN)
    }
}

/// Full catalog record for the details view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub language: Option<String>,
    pub categories: Vec<String>,
}

impl BookDetails {
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            authors: self.authors.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }

    pub fn authors_display(&self) -> String {
        join_or(&self.authors, UNKNOWN)
    }

    /// First four characters of the published date ("2004-05-01" -> "2004")
    pub fn published_year(&self) -> String {
        self.published_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.chars().take(4).collect())
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    pub fn publisher_display(&self) -> String {
        self.publisher
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    pub fn page_count_display(&self) -> String {
        match self.page_count {
            Some(count) if count > 0 => count.to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    pub fn language_display(&self) -> String {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    pub fn categories_display(&self) -> String {
        join_or(&self.categories, MISSING_FIELD)
    }
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}
