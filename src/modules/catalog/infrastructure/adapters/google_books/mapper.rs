use super::models::{ImageLinks, Volume, VolumeInfo, VolumesResponse};
use crate::modules::catalog::domain::{BookDetails, BookSummary, ResultPage};

const UNTITLED: &str = "Untitled";

/// Converts Google Books payloads into catalog domain types
#[derive(Debug, Clone, Default)]
pub struct GoogleBooksMapper;

impl GoogleBooksMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a search envelope. Missing `items` is an empty page and a missing or
    /// negative `totalItems` counts as zero. Volumes without an id are skipped.
    pub fn map_volumes(&self, response: VolumesResponse, page_size: u32) -> ResultPage {
        let total_count = response.total_items.unwrap_or(0).max(0) as u64;

        let items: Vec<BookSummary> = response
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|volume| self.map_summary(volume))
            .collect();

        // The catalog's total is an estimate and can be lower than what it just returned
        let total_count = total_count.max(items.len() as u64);

        ResultPage::new(items, total_count, page_size)
    }

    pub fn map_summary(&self, volume: Volume) -> Option<BookSummary> {
        if volume.id.trim().is_empty() {
            log::debug!("Google Books: skipping volume without id");
            return None;
        }

        let info = volume.volume_info;
        Some(BookSummary {
            id: volume.id,
            title: title_of(&info),
            thumbnail_url: thumbnail_of(info.image_links.as_ref()),
            authors: clean_list(info.authors),
        })
    }

    pub fn map_details(&self, volume: Volume) -> Option<BookDetails> {
        if volume.id.trim().is_empty() {
            return None;
        }

        let info = volume.volume_info;
        Some(BookDetails {
            id: volume.id,
            title: title_of(&info),
            thumbnail_url: thumbnail_of(info.image_links.as_ref()),
            authors: clean_list(info.authors),
            description: non_empty(info.description),
            published_date: non_empty(info.published_date),
            publisher: non_empty(info.publisher),
            page_count: info
                .page_count
                .filter(|count| *count > 0)
                .and_then(|count| u32::try_from(count).ok()),
            language: non_empty(info.language),
            categories: clean_list(info.categories),
        })
    }
}

fn title_of(info: &VolumeInfo) -> String {
    info.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Prefer the larger thumbnail and serve it over https
fn thumbnail_of(links: Option<&ImageLinks>) -> Option<String> {
    let links = links?;
    let url = links
        .thumbnail
        .as_deref()
        .or(links.small_thumbnail.as_deref())
        .map(str::trim)
        .filter(|u| !u.is_empty())?;

    Some(match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    })
}

fn clean_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
