// src/config/consts.rs

// Net config
pub const BACKEND_ORIGIN: &str = "https://book-l8eb.onrender.com";
pub const DEFAULT_START_URL: &str = "http://books.toscrape.com/";
pub const CATALOG_NAME: &str = "books.toscrape.com";

// Book list
pub const VISIBLE_BOOKS: usize = 20;

// Window
pub const WINDOW_W: u32 = 1100;
pub const WINDOW_H: u32 = 800;
pub const WINDOW_TITLE: &str = "Book Scraper";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "book_dash=info";
