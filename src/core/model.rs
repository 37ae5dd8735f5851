// src/core/model.rs
//
// Wire types for the scraping backend.
//
// - ScrapeSummary: body of `POST /scrape`; replaced wholesale per scrape.
// - Book:          one element of `GET /books`; the list is replaced per fetch.
// - Rating:        1..=5 star value, the only legal `?rating=` argument.
// - RatingFilter:  "All" or one Rating; what the filter bar selects.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Star rating in 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Display order used everywhere: best first.
    pub const DESCENDING: [Rating; 5] = [Rating(5), Rating(4), Rating(3), Rating(2), Rating(1)];

    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    #[inline]
    pub fn get(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Rating::new(v).ok_or_else(|| format!("rating must be 1..=5, got {v}"))
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 { r.0 }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which books the list should hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Option<Rating>")]
pub enum RatingFilter {
    #[default]
    All,
    Only(Rating),
}

impl RatingFilter {
    /// Value for the `rating` query parameter; `None` means unfiltered.
    pub fn rating(self) -> Option<Rating> {
        match self {
            RatingFilter::All => None,
            RatingFilter::Only(r) => Some(r),
        }
    }

    /// Filter bar order: All, then 5 → 1.
    pub fn choices() -> impl Iterator<Item = RatingFilter> {
        std::iter::once(RatingFilter::All)
            .chain(Rating::DESCENDING.into_iter().map(RatingFilter::Only))
    }
}

impl From<Option<Rating>> for RatingFilter {
    fn from(r: Option<Rating>) -> Self {
        r.map_or(RatingFilter::All, RatingFilter::Only)
    }
}

impl From<RatingFilter> for Option<Rating> {
    fn from(f: RatingFilter) -> Self { f.rating() }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str("All"),
            RatingFilter::Only(r) => write!(f, "{r}⭐"),
        }
    }
}

/// Result of one scrape run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeSummary {
    pub total_books: u64,

    /// Star value → number of books. JSON keys arrive as strings ("1".."5").
    #[serde(default)]
    pub rating_distribution: BTreeMap<u8, u64>,

    /// Free-form status from the backend, e.g. "Scraping completed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScrapeSummary {
    /// Count for `rating`, 0 when the backend left it out.
    pub fn count_for(&self, rating: Rating) -> u64 {
        self.rating_distribution.get(&rating.get()).copied().unwrap_or(0)
    }
}

/// One catalog entry as the backend reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    /// Pre-formatted, currency symbol included (e.g. "£51.77").
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,

    /// 0 when the scraper could not read a star class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: u8,

    pub url: String,
}

// The scraper emits `null` for fields it failed to extract.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reads_string_keys_and_message() {
        let json = r#"{
            "message": "Scraping completed",
            "total_books": 7,
            "rating_distribution": {"1": 2, "3": 4, "5": 1}
        }"#;
        let s: ScrapeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_books, 7);
        assert_eq!(s.count_for(Rating::new(3).unwrap()), 4);
        assert_eq!(s.count_for(Rating::new(4).unwrap()), 0);
        assert_eq!(s.message.as_deref(), Some("Scraping completed"));
    }

    #[test]
    fn book_nulls_become_defaults() {
        let json = r#"{"title": "A Light in the Attic", "price": null, "rating": null,
                       "url": "http://books.toscrape.com/catalogue/a_1000/index.html"}"#;
        let b: Book = serde_json::from_str(json).unwrap();
        assert_eq!(b.rating, 0);
        assert_eq!(b.price, "");
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(5).map(Rating::get), Some(5));
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn filter_choices_and_labels() {
        let labels: Vec<String> = RatingFilter::choices().map(|f| f.to_string()).collect();
        assert_eq!(labels, ["All", "5⭐", "4⭐", "3⭐", "2⭐", "1⭐"]);
        assert_eq!(RatingFilter::from(None), RatingFilter::All);
    }
}
