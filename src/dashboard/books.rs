// src/dashboard/books.rs
//
// Presentation slice of the book list. State keeps every book; only the
// view is cut to VISIBLE_BOOKS.

use crate::config::consts::VISIBLE_BOOKS;
use crate::core::Book;

#[derive(Clone, Copy, Debug)]
pub struct BookListView<'a> {
    pub shown: &'a [Book],
    pub total: usize,
}

impl<'a> BookListView<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        let n = books.len().min(VISIBLE_BOOKS);
        Self { shown: &books[..n], total: books.len() }
    }

    #[inline]
    pub fn is_truncated(&self) -> bool { self.total > self.shown.len() }

    /// "Showing 20 of N books", only when something was cut.
    pub fn overflow_notice(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing {} of {} books", self.shown.len(), self.total))
    }
}

/// One ⭐ per star, capped at five.
pub fn stars(rating: u8) -> String {
    "⭐".repeat(rating.min(5) as usize)
}
