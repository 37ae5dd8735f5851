// src/gui/components/start_screen.rs
//
// Idle/Scraping view: title, subtitle and the single start button.

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::{config::consts::CATALOG_NAME, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let state = app.controller.state();
    let loading = state.loading;
    let blocked = state.notice.is_some();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("📚 Book Scraper").size(32.0).strong());
        ui.label(RichText::new(format!("Scrape books from {}", CATALOG_NAME)).weak());
        ui.add_space(16.0);

        let text = if loading { "Scraping..." } else { "Start Scraping" };
        let button = egui::Button::new(RichText::new(text).strong().size(16.0))
            .min_size(egui::vec2(180.0, 40.0));

        if ui.add_enabled(!loading && !blocked, button).clicked() {
            actions::scrape(app);
        }

        if loading {
            ui.add_space(8.0);
            ui.add(Spinner::new().size(20.0));
        }
    });
}
