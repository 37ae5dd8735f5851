// src/cli.rs
//
// Headless front-end: same controller and derived views as the GUI, run
// inline, printed as text (or JSON with --json).

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use serde::Serialize;

use crate::{
    config::consts::DEFAULT_START_URL,
    core::{Book, Gateway, HttpGateway, Rating, RatingFilter, ScrapeSummary},
    dashboard::{Controller, Dispatch, report},
};

#[derive(Parser, Debug, Clone)]
#[command(name = "cli")]
#[command(about = "Trigger a backend scrape of books.toscrape.com and print the dashboard")]
#[command(version)]
pub struct Args {
    /// Catalog root the backend should crawl
    #[arg(long, default_value = DEFAULT_START_URL)]
    pub start_url: String,

    /// Only list books with this star rating (1-5)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Print summary and books as JSON instead of the text dashboard
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    summary: &'a ScrapeSummary,
    filter: RatingFilter,
    books: &'a [Book],
}

pub fn run() -> Result<()> {
    crate::log::init();
    let args = Args::parse();
    let out = run_with(&args, HttpGateway::backend()?)?;
    print!("{out}");
    Ok(())
}

/// Drive one scrape (and optional filter) against `gateway`, return the rendered output.
pub fn run_with<G: Gateway + 'static>(args: &Args, gateway: G) -> Result<String> {
    let mut ctl = Controller::new(gateway, Dispatch::Inline);

    ctl.start_scrape(&args.start_url);
    if let Some(n) = &ctl.state().notice {
        return Err(eyre!("{} ({})", n.title, n.detail));
    }

    if let Some(r) = args.rating {
        let rating = Rating::new(r).ok_or_else(|| eyre!("rating must be 1..=5, got {r}"))?;
        // A failed filtered fetch keeps the full list, same as the GUI.
        ctl.select_filter(RatingFilter::Only(rating));
    }

    let state = ctl.state();
    if args.json {
        let summary = state.summary.as_ref().ok_or_else(|| eyre!("no summary after scrape"))?;
        let snap = Snapshot { summary, filter: state.active_filter, books: &state.books };
        Ok(serde_json::to_string_pretty(&snap)? + "\n")
    } else {
        Ok(report::render_text(state))
    }
}
