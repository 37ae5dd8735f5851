// src/dashboard/state.rs
//
// View state and its transition function.
//
// Every change to ViewState goes through `reduce`, a pure function of
// (state, event). Gateway outcomes and user input are both events; nothing
// else writes the state.
//
//   Idle ──ScrapeStarted──▶ Scraping ──ScrapeSucceeded, BooksFetched──▶ Dashboard
//     ▲                        │
//     └──ScrapeFailed──────────┘          Dashboard ──FilterSelected / BooksFetched──▶ Dashboard

use crate::core::{Book, RatingFilter, ScrapeSummary};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Scraping,
    Dashboard,
}

/// Blocking failure message shown over the start screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn backend_error(detail: impl Into<String>) -> Self {
        Self {
            title: s!("Backend error. Is the backend running?"),
            detail: detail.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ScrapeStarted,
    ScrapeSucceeded(ScrapeSummary),
    ScrapeFailed(String),
    BooksFetched { filter: RatingFilter, books: Vec<Book> },
    BooksFetchFailed { filter: RatingFilter, reason: String },
    FilterSelected(RatingFilter),
    NoticeDismissed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub phase: Phase,
    pub loading: bool,
    /// Set once the first scrape + fetch both succeed; never cleared.
    pub dashboard_visible: bool,
    pub summary: Option<ScrapeSummary>,
    pub books: Vec<Book>,
    pub active_filter: RatingFilter,
    pub notice: Option<Notice>,

    // Summary received while the follow-up books fetch is still running.
    pending: Option<ScrapeSummary>,
}

impl ViewState {
    pub fn is_idle(&self) -> bool { self.phase == Phase::Idle }

    /// Summary held between the trigger and fetch calls, if any.
    pub fn pending_summary(&self) -> Option<&ScrapeSummary> { self.pending.as_ref() }

    fn abort_scrape(mut self, reason: String) -> Self {
        self.phase = Phase::Idle;
        self.loading = false;
        self.pending = None;
        self.notice = Some(Notice::backend_error(reason));
        self
    }
}

/// Apply one event. Events that make no sense in the current phase leave
/// the state untouched.
pub fn reduce(mut state: ViewState, event: Event) -> ViewState {
    use Event::*;
    use Phase::*;

    match (state.phase, event) {
        (Idle, ScrapeStarted) => {
            state.phase = Scraping;
            state.loading = true;
            state.notice = None;
            state
        }

        (Scraping, ScrapeSucceeded(summary)) => {
            state.pending = Some(summary);
            state
        }

        (Scraping, BooksFetched { books, .. }) => match state.pending.take() {
            Some(summary) => {
                state.summary = Some(summary);
                state.books = books;
                state.active_filter = RatingFilter::All;
                state.dashboard_visible = true;
                state.loading = false;
                state.phase = Dashboard;
                state
            }
            // Books without a summary: the trigger never completed.
            None => state,
        },

        (Scraping, ScrapeFailed(reason)) | (Scraping, BooksFetchFailed { reason, .. }) => {
            state.abort_scrape(reason)
        }

        (Dashboard, FilterSelected(filter)) => {
            state.active_filter = filter;
            state
        }

        // Whichever response lands last wins, even if it answers an older selection.
        (Dashboard, BooksFetched { books, .. }) => {
            state.books = books;
            state
        }

        (_, NoticeDismissed) => {
            state.notice = None;
            state
        }

        _ => state,
    }
}
