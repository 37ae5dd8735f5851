// tests/chart_data.rs
//
// Rating distribution → chart buckets and headline cards.
//
mod common;

use book_dash::dashboard::chart::{ChartData, Headline, Rgb, rating_color};
use book_dash::core::Rating;
use common::{fifty_book_summary, summary};

#[test]
fn scenario_counts_in_descending_rating_order() {
    let chart = ChartData::from_summary(&fifty_book_summary());
    assert_eq!(chart.counts(), [10, 15, 10, 10, 5]);

    let ratings: Vec<u8> = chart.buckets.iter().map(|b| b.rating.get()).collect();
    assert_eq!(ratings, [5, 4, 3, 2, 1]);

    let labels: Vec<&str> = chart.buckets.iter().map(|b| b.label).collect();
    assert_eq!(labels, ["5 Stars", "4 Stars", "3 Stars", "2 Stars", "1 Star"]);
}

#[test]
fn missing_ratings_default_to_zero() {
    let chart = ChartData::from_summary(&summary(9, &[(4, 6), (1, 3)]));
    assert_eq!(chart.counts(), [0, 6, 0, 0, 3]);

    let empty = ChartData::from_summary(&summary(0, &[]));
    assert_eq!(empty.counts(), [0; 5]);
    assert_eq!(empty.total(), 0);
}

#[test]
fn unknown_keys_do_not_leak_into_buckets() {
    let chart = ChartData::from_summary(&summary(3, &[(0, 7), (6, 2), (3, 3)]));
    assert_eq!(chart.counts(), [0, 0, 3, 0, 0]);
}

#[test]
fn fixed_colors_per_rating() {
    let hex: Vec<String> = Rating::DESCENDING.iter().map(|&r| rating_color(r).hex()).collect();
    assert_eq!(hex, ["#4ade80", "#a3e635", "#fde047", "#fb923c", "#f87171"]);

    let chart = ChartData::from_summary(&summary(1, &[(2, 1)]));
    assert_eq!(chart.buckets[3].color, Rgb(0xfb, 0x92, 0x3c));
}

#[test]
fn shares_sum_to_one_or_are_all_zero() {
    let chart = ChartData::from_summary(&fifty_book_summary());
    let shares = chart.shares();
    let sum: f32 = shares.iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
    assert!((shares[1] - 0.30).abs() < 1e-5);

    let empty = ChartData::from_summary(&summary(0, &[]));
    assert_eq!(empty.shares(), [0.0; 5]);
}

#[test]
fn headline_cards() {
    let head = Headline::from_summary(&fifty_book_summary());
    assert_eq!(head.total_books, 50);
    assert_eq!(head.highest_rated(), "10 books with 5⭐");

    let none = Headline::from_summary(&summary(4, &[(3, 4)]));
    assert_eq!(none.highest_rated(), "0 books with 5⭐");
}
