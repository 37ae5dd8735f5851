// src/dashboard/chart.rs
//
// Chart-ready view of a rating distribution.
// Always rebuilt from the summary; never stored next to it.

use crate::core::{Rating, ScrapeSummary};

/// Plain sRGB triple; the GUI converts to its own color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub fn rating_color(rating: Rating) -> Rgb {
    match rating.get() {
        5 => Rgb(0x4a, 0xde, 0x80), // green
        4 => Rgb(0xa3, 0xe6, 0x35), // yellow-green
        3 => Rgb(0xfd, 0xe0, 0x47), // yellow
        2 => Rgb(0xfb, 0x92, 0x3c), // orange
        _ => Rgb(0xf8, 0x71, 0x71), // red
    }
}

pub fn rating_label(rating: Rating) -> &'static str {
    match rating.get() {
        5 => "5 Stars",
        4 => "4 Stars",
        3 => "3 Stars",
        2 => "2 Stars",
        _ => "1 Star",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub rating: Rating,
    pub label: &'static str,
    pub count: u64,
    pub color: Rgb,
}

/// Five buckets, 5★ first. Shared by the pie and the bar chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartData {
    pub buckets: [Bucket; 5],
}

impl ChartData {
    pub fn from_summary(summary: &ScrapeSummary) -> Self {
        let buckets = Rating::DESCENDING.map(|rating| Bucket {
            rating,
            label: rating_label(rating),
            count: summary.count_for(rating),
            color: rating_color(rating),
        });
        Self { buckets }
    }

    pub fn counts(&self) -> [u64; 5] {
        self.buckets.map(|b| b.count)
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Share of the whole per bucket (pie). All zero when there is nothing to show.
    pub fn shares(&self) -> [f32; 5] {
        let total = self.total();
        if total == 0 {
            return [0.0; 5];
        }
        self.buckets.map(|b| b.count as f32 / total as f32)
    }
}

/// Stat cards above the charts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    pub total_books: u64,
    pub five_star: u64,
}

impl Headline {
    pub fn from_summary(summary: &ScrapeSummary) -> Self {
        Self {
            total_books: summary.total_books,
            five_star: summary.count_for(Rating::DESCENDING[0]),
        }
    }

    pub fn highest_rated(&self) -> String {
        format!("{} books with 5⭐", self.five_star)
    }
}
