// src/dashboard/controller.rs
//
// Owns the ViewState and runs gateway jobs.
//
// Jobs never touch the state. They send Events down a channel, and the
// owning (UI) thread applies them through `reduce` in `pump()`. With
// `Dispatch::Background` each job gets its own worker thread; with
// `Dispatch::Inline` it runs on the caller and is applied before returning.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use crate::core::{Gateway, RatingFilter};
use super::state::{Event, Phase, ViewState, reduce};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// One worker thread per job (GUI).
    Background,
    /// Run on the calling thread (CLI, tests).
    Inline,
}

/// Called from a worker after it has queued its events.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct Controller<G: Gateway + 'static> {
    gateway: Arc<G>,
    state: ViewState,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    dispatch: Dispatch,
    waker: Option<Waker>,
}

impl<G: Gateway + 'static> Controller<G> {
    pub fn new(gateway: G, dispatch: Dispatch) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            gateway: Arc::new(gateway),
            state: ViewState::default(),
            tx,
            rx,
            dispatch,
            waker: None,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    pub fn state(&self) -> &ViewState { &self.state }

    pub fn gateway(&self) -> &G { &self.gateway }

    /// Start action. Only honoured while idle.
    pub fn start_scrape(&mut self, start_url: &str) {
        if !self.state.is_idle() {
            logd!("Scrape: Ignored start while {:?}", self.state.phase);
            return;
        }
        logf!("Scrape: Begin start_url={}", start_url);
        self.apply(Event::ScrapeStarted);

        let url = s!(start_url);
        self.spawn(
            move |gw, tx| scrape_job(gw, &url, tx),
            Event::ScrapeFailed(s!("could not start scrape worker")),
        );
    }

    /// Filter bar click. Only honoured on the dashboard.
    pub fn select_filter(&mut self, filter: RatingFilter) {
        if self.state.phase != Phase::Dashboard {
            logd!("UI: Ignored filter {} while {:?}", filter, self.state.phase);
            return;
        }
        logf!("UI: Filter → {}", filter);
        self.apply(Event::FilterSelected(filter));

        self.spawn(
            move |gw, tx| filter_job(gw, filter, tx),
            Event::BooksFetchFailed { filter, reason: s!("could not start fetch worker") },
        );
    }

    pub fn dismiss_notice(&mut self) {
        self.apply(Event::NoticeDismissed);
    }

    /// Apply every queued event. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut n = 0;
        while let Ok(ev) = self.rx.try_recv() {
            self.apply(ev);
            n += 1;
        }
        n
    }

    fn apply(&mut self, ev: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, ev);
    }

    fn spawn<F>(&mut self, job: F, on_spawn_error: Event)
    where
        F: FnOnce(&G, &Sender<Event>) + Send + 'static,
    {
        match self.dispatch {
            Dispatch::Inline => {
                job(&*self.gateway, &self.tx);
                self.pump();
            }
            Dispatch::Background => {
                let gw = Arc::clone(&self.gateway);
                let tx = self.tx.clone();
                let waker = self.waker.clone();

                let spawned = thread::Builder::new()
                    .name(s!("gateway"))
                    .spawn(move || {
                        job(&*gw, &tx);
                        if let Some(wake) = waker { wake(); }
                    });

                if let Err(e) = spawned {
                    loge!("Worker: Spawn failed: {}", e);
                    self.apply(on_spawn_error);
                }
            }
        }
    }
}

/// Trigger, then fetch the unfiltered list. The fetch only starts after
/// the trigger call has returned successfully.
pub fn scrape_job<G: Gateway + ?Sized>(gw: &G, start_url: &str, tx: &Sender<Event>) {
    let summary = match gw.trigger_scrape(start_url) {
        Ok(s) => s,
        Err(e) => {
            loge!("Scrape: Trigger failed: {}", e);
            let _ = tx.send(Event::ScrapeFailed(e.to_string()));
            return;
        }
    };
    logf!(
        "Scrape: OK total_books={} buckets={}",
        summary.total_books,
        summary.rating_distribution.len()
    );
    let _ = tx.send(Event::ScrapeSucceeded(summary));

    match gw.fetch_books(None) {
        Ok(books) => {
            logf!("Books: Fetched {} (All)", books.len());
            let _ = tx.send(Event::BooksFetched { filter: RatingFilter::All, books });
        }
        Err(e) => {
            loge!("Books: Initial fetch failed: {}", e);
            let _ = tx.send(Event::ScrapeFailed(e.to_string()));
        }
    }
}

/// Fetch one filtered list. Failures are logged and reported, never shown.
pub fn filter_job<G: Gateway + ?Sized>(gw: &G, filter: RatingFilter, tx: &Sender<Event>) {
    match gw.fetch_books(filter.rating()) {
        Ok(books) => {
            logf!("Books: Fetched {} ({})", books.len(), filter);
            let _ = tx.send(Event::BooksFetched { filter, books });
        }
        Err(e) => {
            loge!("Books: Fetch failed ({}): {}", filter, e);
            let _ = tx.send(Event::BooksFetchFailed { filter, reason: e.to_string() });
        }
    }
}
