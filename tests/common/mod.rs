// tests/common/mod.rs
//
// Fixtures shared by the integration tests: sample payloads and a
// scripted in-memory Gateway that records every call it receives.
#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use book_dash::core::{BackendError, Book, Gateway, Rating, ScrapeSummary};

pub fn summary(total: u64, dist: &[(u8, u64)]) -> ScrapeSummary {
    ScrapeSummary {
        total_books: total,
        rating_distribution: dist.iter().copied().collect::<BTreeMap<_, _>>(),
        message: Some("Scraping completed".into()),
    }
}

/// The 50-book run used by the dashboard scenarios.
pub fn fifty_book_summary() -> ScrapeSummary {
    summary(50, &[(5, 10), (4, 15), (3, 10), (2, 10), (1, 5)])
}

pub fn books(n: usize, rating: u8) -> Vec<Book> {
    (0..n)
        .map(|i| Book {
            title: format!("Book {i}"),
            price: format!("£{}.99", 10 + i),
            rating,
            url: format!("http://books.toscrape.com/catalogue/book_{i}/index.html"),
        })
        .collect()
}

pub fn down() -> BackendError {
    BackendError::Transport {
        url: "http://backend.test/scrape".into(),
        reason: "connection refused".into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Scrape(String),
    Books(Option<u8>),
}

/// Replies are consumed in order per operation; an empty queue is an error.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<Call>>,
    scrape: Mutex<VecDeque<Result<ScrapeSummary, BackendError>>>,
    books: Mutex<VecDeque<Result<Vec<Book>, BackendError>>>,
}

impl FakeGateway {
    pub fn new() -> Self { Self::default() }

    pub fn scrape_reply(self, r: Result<ScrapeSummary, BackendError>) -> Self {
        self.scrape.lock().unwrap().push_back(r);
        self
    }

    pub fn books_reply(self, r: Result<Vec<Book>, BackendError>) -> Self {
        self.books.lock().unwrap().push_back(r);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl Gateway for FakeGateway {
    fn trigger_scrape(&self, start_url: &str) -> Result<ScrapeSummary, BackendError> {
        self.calls.lock().unwrap().push(Call::Scrape(start_url.to_string()));
        self.scrape.lock().unwrap().pop_front().unwrap_or_else(|| Err(down()))
    }

    fn fetch_books(&self, rating: Option<Rating>) -> Result<Vec<Book>, BackendError> {
        self.calls.lock().unwrap().push(Call::Books(rating.map(Rating::get)));
        self.books.lock().unwrap().pop_front().unwrap_or_else(|| Err(down()))
    }
}
