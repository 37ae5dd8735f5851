// src/dashboard/report.rs
//
// Plain-text rendering of the dashboard, used by the CLI. Same derived data
// as the GUI: headline cards, both charts, truncated book list.

use std::fmt::Write;

use super::{
    books::{BookListView, stars},
    chart::{ChartData, Headline},
    state::ViewState,
};

const BAR_WIDTH: u64 = 40;

pub fn render_text(state: &ViewState) -> String {
    let mut out = s!();

    let Some(summary) = state.summary.as_ref() else {
        match &state.notice {
            Some(n) => { let _ = writeln!(out, "{}\n{}", n.title, n.detail); }
            None => out.push_str("No data yet.\n"),
        }
        return out;
    };

    let head = Headline::from_summary(summary);
    let chart = ChartData::from_summary(summary);

    let _ = writeln!(out, "📚 Books Dashboard");
    if let Some(msg) = &summary.message {
        let _ = writeln!(out, "{msg}");
    }
    let _ = writeln!(out, "Total Books: {}", head.total_books);
    let _ = writeln!(out, "Highest Rated: {}", head.highest_rated());
    out.push('\n');

    let _ = writeln!(out, "Rating Distribution");
    let max = chart.max_count().max(1);
    for (b, share) in chart.buckets.iter().zip(chart.shares()) {
        let len = (b.count * BAR_WIDTH).div_ceil(max) as usize;
        let _ = writeln!(
            out,
            "{:>8} {:>5} {:>5.1}% {}",
            b.label,
            b.count,
            share * 100.0,
            "█".repeat(len)
        );
    }
    out.push('\n');

    let list = BookListView::new(&state.books);
    let _ = writeln!(out, "📖 Scraped Books ({})", state.active_filter);
    for book in list.shown {
        let _ = writeln!(out, "- {} | {} | {} | {}", book.title, book.price, stars(book.rating), book.url);
    }
    if let Some(more) = list.overflow_notice() {
        let _ = writeln!(out, "{more}");
    }

    out
}
