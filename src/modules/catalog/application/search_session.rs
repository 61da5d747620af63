//! Search view controller
//!
//! Owns the search state, the page cursor and the last fetched page. Every
//! trigger (mount, term/genre change, page change, reload) issues a fetch
//! tagged with a sequence number; a response is applied only if no newer
//! fetch was issued while it was in flight.

use super::search_loader::{
    FetchError, LoadState, SearchResultLoader, FETCH_ERROR_MESSAGE, NO_RESULTS_MESSAGE,
};
use super::url_state::UrlStateBinding;
use crate::modules::catalog::domain::{BookSummary, QueryComposer, SearchState};
use crate::shared::application::{Advance, PageCursor, PageDirection, PAGE_WINDOW_SIZE};
use crate::shared::utils::logger::LogContext;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// What a trigger ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The response was written into the session
    Applied(SearchStatus),
    /// A newer fetch was issued before this one resolved; its result was dropped
    Superseded,
    /// Navigation was blocked (first/last page); nothing was fetched
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed,
}

/// Render-ready snapshot of the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub state: SearchState,
    pub query: String,
    pub status: SearchStatus,
    pub items: Vec<BookSummary>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub page_window: Vec<u32>,
    pub message: Option<String>,
}

struct SessionInner {
    state: SearchState,
    cursor: PageCursor,
    items: Vec<BookSummary>,
    load_state: LoadState,
}

struct FetchTicket {
    sequence: u64,
    query: String,
    page: u32,
    page_size: u32,
    offset: u64,
}

pub struct SearchSession {
    inner: RwLock<SessionInner>,
    sequence: AtomicU64,
    loader: SearchResultLoader,
    composer: QueryComposer,
    url: UrlStateBinding,
}

impl SearchSession {
    /// Build the session from the current URL. Nothing is fetched until
    /// [`SearchSession::load`] is called.
    pub fn mount(
        loader: SearchResultLoader,
        composer: QueryComposer,
        url: UrlStateBinding,
        page_size: u32,
    ) -> Self {
        let state = url.read();
        let cursor = PageCursor::new(page_size).with_page(state.page());

        log::debug!(
            "Search session mounted: term='{}', genre={:?}, page={}",
            state.term(),
            state.category(),
            state.page()
        );

        Self {
            inner: RwLock::new(SessionInner {
                state,
                cursor,
                items: Vec::new(),
                load_state: LoadState::Idle,
            }),
            sequence: AtomicU64::new(0),
            loader,
            composer,
            url,
        }
    }

    /// Initial fetch after mount
    pub async fn load(&self) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    /// Fetch the current state again (user-triggered retry)
    pub async fn reload(&self) -> LoadOutcome {
        self.load().await
    }

    /// New free text from the search form
    pub async fn set_term(&self, term: &str) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.state.set_term(term);
            self.restart_pagination(&mut inner);
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    /// New genre filter; `None` or blank clears it
    pub async fn set_category(&self, category: Option<&str>) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.state.set_category(category);
            self.restart_pagination(&mut inner);
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    /// Term and genre submitted together; a single fetch
    pub async fn submit(&self, term: &str, category: Option<&str>) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.state.set_term(term);
            inner.state.set_category(category);
            self.restart_pagination(&mut inner);
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    pub async fn next_page(&self) -> LoadOutcome {
        self.advance(PageDirection::Next).await
    }

    pub async fn prev_page(&self) -> LoadOutcome {
        self.advance(PageDirection::Prev).await
    }

    /// Jump via a page-number button
    pub async fn go_to_page(&self, page: u32) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            if page == inner.cursor.page() || !inner.cursor.jump_to(page) {
                return LoadOutcome::Unchanged;
            }
            self.sync_page(&mut inner);
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    async fn advance(&self, direction: PageDirection) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            match inner.cursor.advance(direction) {
                Advance::Moved(_) => {}
                Advance::AtStart | Advance::AtEnd => return LoadOutcome::Unchanged,
            }
            self.sync_page(&mut inner);
            self.issue(&mut inner)
        };
        self.run(ticket).await
    }

    pub async fn state(&self) -> SearchState {
        self.inner.read().await.state.clone()
    }

    pub async fn view(&self) -> SearchView {
        let inner = self.inner.read().await;
        let status = status_of(&inner.load_state);

        let message = match status {
            SearchStatus::Empty => Some(NO_RESULTS_MESSAGE.to_string()),
            SearchStatus::Failed => Some(FETCH_ERROR_MESSAGE.to_string()),
            _ => None,
        };

        SearchView {
            state: inner.state.clone(),
            query: self.composer.compose_state(&inner.state),
            status,
            items: inner.items.clone(),
            total_count: inner.cursor.total_count(),
            total_pages: inner.cursor.total_pages(),
            page_label: format!(
                "Page {} of {}",
                inner.cursor.page(),
                inner.cursor.total_pages()
            ),
            prev_enabled: inner.cursor.can_prev(),
            next_enabled: inner.cursor.can_next(),
            page_window: inner.cursor.page_window(PAGE_WINDOW_SIZE).collect(),
            message,
        }
    }

    fn restart_pagination(&self, inner: &mut SessionInner) {
        inner.cursor.reset();
        self.url.write(&inner.state);
    }

    fn sync_page(&self, inner: &mut SessionInner) {
        let page = inner.cursor.page();
        inner.state.set_page(page);
        self.url.write(&inner.state);
    }

    /// Claim the next sequence number and move to `Loading`; runs under the write lock
    fn issue(&self, inner: &mut SessionInner) -> FetchTicket {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        inner.load_state = LoadState::Loading;

        FetchTicket {
            sequence,
            query: self.composer.compose_state(&inner.state),
            page: inner.cursor.page(),
            page_size: inner.cursor.page_size(),
            offset: inner.cursor.offset(),
        }
    }

    async fn run(&self, ticket: FetchTicket) -> LoadOutcome {
        LogContext::search_page(&ticket.query, ticket.page, None);

        let result = self
            .loader
            .fetch(&ticket.query, ticket.page_size, ticket.offset)
            .await;

        let mut inner = self.inner.write().await;
        if self.sequence.load(Ordering::SeqCst) != ticket.sequence {
            log::debug!(
                "Discarding stale response #{} for '{}' page {}",
                ticket.sequence,
                ticket.query,
                ticket.page
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                LogContext::search_page(&ticket.query, ticket.page, Some(page.items.len()));
                inner.cursor.set_total(page.total_count);
                inner.items = page.items.clone();
                inner.load_state = LoadState::Success(page);
            }
            Err(e) => {
                log::warn!("Search for '{}' failed: {}", ticket.query, e);
                // The cursor keeps the last known total so paging stays usable
                inner.items.clear();
                inner.load_state = LoadState::Failed(e);
            }
        }

        LoadOutcome::Applied(status_of(&inner.load_state))
    }

    /// Last fetch error, if the latest fetch failed
    pub async fn last_error(&self) -> Option<FetchError> {
        match &self.inner.read().await.load_state {
            LoadState::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }
}

fn status_of(load_state: &LoadState) -> SearchStatus {
    match load_state {
        LoadState::Idle => SearchStatus::Idle,
        LoadState::Loading => SearchStatus::Loading,
        LoadState::Success(page) if page.is_empty() => SearchStatus::Empty,
        LoadState::Success(_) => SearchStatus::Loaded,
        LoadState::Failed(_) => SearchStatus::Failed,
    }
}
