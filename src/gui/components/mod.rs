// src/gui/components/mod.rs
pub mod book_table;
pub mod charts;
pub mod dashboard;
pub mod filter_bar;
pub mod notice;
pub mod start_screen;
pub mod stats;

use eframe::egui::Color32;
use crate::dashboard::chart::Rgb;

#[inline]
pub(crate) fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}
