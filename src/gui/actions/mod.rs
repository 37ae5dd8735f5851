// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{scrape,filter,dismiss}.

mod filter;  // src/gui/actions/filter.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use filter::filter;
pub use scrape::{dismiss, scrape};
