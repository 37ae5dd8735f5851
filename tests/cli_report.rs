// tests/cli_report.rs
//
// Headless front-end against the scripted gateway.
//
#![cfg(feature = "cli")]
mod common;

use book_dash::cli::{Args, run_with};
use book_dash::config::consts::DEFAULT_START_URL;
use clap::Parser;
use common::{FakeGateway, books, down, fifty_book_summary};
use serde_json::Value;

fn args(extra: &[&str]) -> Args {
    Args::parse_from(std::iter::once("cli").chain(extra.iter().copied()))
}

#[test]
fn defaults() {
    let a = args(&[]);
    assert_eq!(a.start_url, DEFAULT_START_URL);
    assert_eq!(a.rating, None);
    assert!(!a.json);
    assert!(Args::try_parse_from(["cli", "--rating", "6"]).is_err());
}

#[test]
fn text_report_for_full_list() {
    let gw = FakeGateway::new()
        .scrape_reply(Ok(fifty_book_summary()))
        .books_reply(Ok(books(50, 5)));
    let out = run_with(&args(&[]), gw).unwrap();

    assert!(out.contains("Total Books: 50"));
    assert!(out.contains("Showing 20 of 50 books"));
    assert!(out.contains("5 Stars"));
}

#[test]
fn json_with_rating_filter() {
    let gw = FakeGateway::new()
        .scrape_reply(Ok(fifty_book_summary()))
        .books_reply(Ok(books(50, 4)))
        .books_reply(Ok(books(10, 3)));
    let out = run_with(&args(&["--rating", "3", "--json"]), gw).unwrap();

    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["filter"], 3);
    assert_eq!(v["books"].as_array().unwrap().len(), 10);
    assert_eq!(v["summary"]["total_books"], 50);
    assert_eq!(v["summary"]["rating_distribution"]["4"], 15);
}

#[test]
fn failed_scrape_is_an_error() {
    let gw = FakeGateway::new().scrape_reply(Err(down()));
    let err = run_with(&args(&[]), gw).unwrap_err();
    assert!(err.to_string().contains("Backend error"));
}
