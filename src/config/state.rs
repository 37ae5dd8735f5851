// src/config/state.rs
use super::consts::*;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Catalog root handed to the backend on "Start Scraping"
    pub start_url: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            start_url: s!(DEFAULT_START_URL),
        }
    }
}
