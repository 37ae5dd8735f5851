// src/core/net.rs
//
// Backend gateway: `POST /scrape` and `GET /books[?rating=]`.
// One attempt per call. No timeout, no retry, no caching.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::consts::BACKEND_ORIGIN;
use super::{
    error::BackendError,
    model::{Book, Rating, ScrapeSummary},
};

/// The two calls the dashboard makes. Implemented over HTTP for the app,
/// and by in-memory fakes in tests.
pub trait Gateway: Send + Sync {
    fn trigger_scrape(&self, start_url: &str) -> Result<ScrapeSummary, BackendError>;
    fn fetch_books(&self, rating: Option<Rating>) -> Result<Vec<Book>, BackendError>;
}

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    start_url: &'a str,
}

pub struct HttpGateway {
    client: Client,
    origin: String,
}

impl HttpGateway {
    pub fn new(origin: &str) -> Result<Self, BackendError> {
        let origin = origin.trim_end_matches('/').to_string();
        let client = Client::builder()
            // Blocking client defaults to a 30s timeout; calls here wait until the backend answers.
            .timeout(None::<Duration>)
            .user_agent(concat!("book_dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport { url: origin.clone(), reason: e.to_string() })?;
        Ok(Self { client, origin })
    }

    /// Use a pre-built client (custom proxy/TLS settings).
    pub fn with_client(origin: &str, client: Client) -> Self {
        Self { client, origin: origin.trim_end_matches('/').to_string() }
    }

    /// Gateway for the compiled-in backend.
    pub fn backend() -> Result<Self, BackendError> {
        Self::new(BACKEND_ORIGIN)
    }

    pub fn origin(&self) -> &str { &self.origin }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

impl Gateway for HttpGateway {
    fn trigger_scrape(&self, start_url: &str) -> Result<ScrapeSummary, BackendError> {
        let url = self.url("/scrape");
        logd!("Net: POST {} start_url={}", url, start_url);

        let resp = self.client
            .post(&url)
            .json(&ScrapeRequest { start_url })
            .send();
        read_json(&url, resp)
    }

    fn fetch_books(&self, rating: Option<Rating>) -> Result<Vec<Book>, BackendError> {
        let url = self.url("/books");
        logd!("Net: GET {} rating={:?}", url, rating.map(Rating::get));

        let mut req = self.client.get(&url);
        if let Some(r) = rating {
            req = req.query(&[("rating", r.get())]);
        }
        read_json(&url, req.send())
    }
}

// Any non-2xx is a failure; the body is only read on success.
fn read_json<T: DeserializeOwned>(
    url: &str,
    resp: reqwest::Result<Response>,
) -> Result<T, BackendError> {
    let resp = resp.map_err(|e| BackendError::Transport { url: s!(url), reason: e.to_string() })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BackendError::Status { url: s!(url), status: status.as_u16() });
    }

    resp.json::<T>()
        .map_err(|e| BackendError::Decode { url: s!(url), reason: e.to_string() })
}
