use serde::{Deserialize, Serialize};

/// What the user is looking at: free text, optional genre, and a 1-based page.
///
/// Invariant: `page >= 1`. Blank genres are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    term: String,
    category: Option<String>,
    page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: None,
            page: 1,
        }
    }
}

impl SearchState {
    pub fn new(term: &str, category: Option<&str>, page: u32) -> Self {
        Self {
            term: term.trim().to_string(),
            category: normalize_category(category),
            page: page.max(1),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// New free text; always starts over at page 1
    pub fn set_term(&mut self, term: &str) {
        self.term = term.trim().to_string();
        self.page = 1;
    }

    /// New genre filter; always starts over at page 1
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize_category(category);
        self.page = 1;
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SearchState::default();
        assert_eq!(state.term(), "");
        assert_eq!(state.category(), None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_never_below_one() {
        assert_eq!(SearchState::new("x", None, 0).page(), 1);
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut state = SearchState::new("", Some("fantasy"), 3);
        state.set_category(Some("mystery"));
        assert_eq!(state.page(), 1);
        assert_eq!(state.category(), Some("mystery"));
    }

    #[test]
    fn test_term_change_resets_page() {
        let mut state = SearchState::new("dune", None, 4);
        state.set_term("  dune messiah ");
        assert_eq!(state.page(), 1);
        assert_eq!(state.term(), "dune messiah");
    }

    #[test]
    fn test_blank_category_is_none() {
        assert_eq!(SearchState::new("", Some("   "), 1).category(), None);
    }
}
