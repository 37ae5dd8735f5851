// src/gui/components/dashboard.rs
//
// Dashboard page layout. Chart data and headline are rebuilt every frame
// from the summary in state.

use eframe::egui::{self, RichText};
use crate::{
    config::consts::CATALOG_NAME,
    dashboard::chart::{ChartData, Headline},
    gui::app::App,
};

use super::{book_table, charts, filter_bar, stats};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(summary) = app.controller.state().summary.as_ref() else { return };
    let head = Headline::from_summary(summary);
    let chart = ChartData::from_summary(summary);
    let message = summary.message.clone();

    ui.vertical_centered(|ui| {
        ui.label(RichText::new("📚 Books Dashboard").size(28.0).strong());
        ui.label(RichText::new(format!("Data from {}", CATALOG_NAME)).weak());
        if let Some(msg) = message {
            ui.label(RichText::new(msg).small().weak());
        }
    });
    ui.add_space(12.0);

    stats::draw(ui, &head);
    ui.add_space(12.0);

    charts::draw(ui, &chart);
    ui.add_space(12.0);

    ui.separator();
    ui.heading("📖 Scraped Books");
    filter_bar::draw(ui, app);
    ui.add_space(6.0);
    book_table::draw(ui, app);
}
