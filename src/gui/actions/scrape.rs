// src/gui/actions/scrape.rs
use crate::gui::app::App;

/// "Start Scraping" button. The controller ignores it unless idle.
pub fn scrape(app: &mut App) {
    let url = app.gui.start_url.clone();
    logf!("UI: Start scraping clicked ({})", url);
    app.controller.start_scrape(&url);
}

/// Close the failure notice; the start button becomes usable again.
pub fn dismiss(app: &mut App) {
    logd!("UI: Notice dismissed");
    app.controller.dismiss_notice();
}
