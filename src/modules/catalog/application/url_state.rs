//! Keeps the search state and the address bar's query string in step
//!
//! Parameters: `query` (free text), `genre` (category tag), `page` (1-based).
//! Writes replace the current history entry so paging never piles up
//! back-button entries.

use crate::modules::catalog::domain::SearchState;
use std::borrow::Cow;
use std::sync::{Arc, RwLock};

pub const TERM_PARAM: &str = "query";
pub const CATEGORY_PARAM: &str = "genre";
pub const PAGE_PARAM: &str = "page";

/// The address bar as seen by the search view
pub trait LocationBar: Send + Sync {
    /// Current query string without the leading `?`
    fn query_string(&self) -> String;

    /// Swap the current history entry's query string
    fn replace_query_string(&self, query: &str);
}

/// In-memory history stack; the last entry is the current location
#[derive(Debug)]
pub struct MemoryLocation {
    entries: RwLock<Vec<String>>,
}

impl MemoryLocation {
    pub fn new(initial_query: &str) -> Self {
        Self {
            entries: RwLock::new(vec![initial_query.trim_start_matches('?').to_string()]),
        }
    }

    /// Navigate to a new location, adding a history entry
    pub fn push(&self, query: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.trim_start_matches('?').to_string());
    }

    pub fn history_len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn history(&self) -> Vec<String> {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl LocationBar for MemoryLocation {
    fn query_string(&self) -> String {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn replace_query_string(&self, query: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let query = query.trim_start_matches('?').to_string();
        match entries.last_mut() {
            Some(current) => *current = query,
            None => entries.push(query),
        }
    }
}

/// Two-way binding between [`SearchState`] and a [`LocationBar`]
#[derive(Clone)]
pub struct UrlStateBinding {
    location: Arc<dyn LocationBar>,
}

impl UrlStateBinding {
    pub fn new(location: Arc<dyn LocationBar>) -> Self {
        Self { location }
    }

    /// Seed state from the current URL; absent or invalid values use defaults
    pub fn read(&self) -> SearchState {
        parse_search_state(&self.location.query_string())
    }

    /// Reflect state in the URL, keeping parameters owned by other views
    pub fn write(&self, state: &SearchState) {
        let current = self.location.query_string();
        let next = format_search_state(state, &current);
        if next != current {
            log::debug!("Replacing location query: '{}' -> '{}'", current, next);
            self.location.replace_query_string(&next);
        }
    }
}

/// Parse `query`, `genre` and `page` out of a query string
pub fn parse_search_state(query_string: &str) -> SearchState {
    let mut term = String::new();
    let mut category = String::new();
    let mut page = 1;

    for (key, value) in parse_pairs(query_string) {
        match key.as_str() {
            TERM_PARAM => term = value,
            CATEGORY_PARAM => category = value,
            PAGE_PARAM => {
                page = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p >= 1)
                    .unwrap_or(1)
            }
            _ => {}
        }
    }

    SearchState::new(&term, Some(&category), page)
}

/// Render state into a query string, preserving unrelated parameters after ours
pub fn format_search_state(state: &SearchState, existing: &str) -> String {
    let mut parts = Vec::new();

    if !state.term().is_empty() {
        parts.push(format!("{}={}", TERM_PARAM, urlencoding::encode(state.term())));
    }
    if let Some(category) = state.category() {
        parts.push(format!("{}={}", CATEGORY_PARAM, urlencoding::encode(category)));
    }
    parts.push(format!("{}={}", PAGE_PARAM, state.page()));

    for raw in existing.trim_start_matches('?').split('&') {
        if raw.is_empty() {
            continue;
        }
        let key = decode_component(raw.split('=').next().unwrap_or(raw));
        if key != TERM_PARAM && key != CATEGORY_PARAM && key != PAGE_PARAM {
            parts.push(raw.to_string());
        }
    }

    parts.join("&")
}

fn parse_pairs(query_string: &str) -> Vec<(String, String)> {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Form-style decoding: `+` is a space, invalid escapes are kept as written
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(decoded)) => decoded.to_string(),
        Ok(Cow::Owned(decoded)) => decoded,
        Err(_) => spaced,
    }
}
