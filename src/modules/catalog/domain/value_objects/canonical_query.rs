use super::search_state::SearchState;

/// Builds the single query string sent to the catalog.
///
/// `"harry potter"` + `fantasy` becomes `"harry potter subject:fantasy"`;
/// when both parts are blank the configured fallback is used so the catalog
/// never receives an empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryComposer {
    fallback: String,
}

impl QueryComposer {
    pub fn new(fallback: &str) -> Self {
        Self {
            fallback: fallback.trim().to_string(),
        }
    }

    pub fn compose(&self, term: &str, category: Option<&str>) -> String {
        let term = term.trim();
        let category = category.map(str::trim).filter(|c| !c.is_empty());

        let mut fragments = Vec::with_capacity(2);
        if !term.is_empty() {
            fragments.push(term.to_string());
        }
        if let Some(category) = category {
            fragments.push(format!("subject:{}", category));
        }

        if fragments.is_empty() {
            self.fallback.clone()
        } else {
            fragments.join(" ")
        }
    }

    pub fn compose_state(&self, state: &SearchState) -> String {
        self.compose(state.term(), state.category())
    }
}
