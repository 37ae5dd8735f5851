// src/gui/components/stats.rs
use eframe::egui::{self, RichText};
use crate::dashboard::chart::Headline;

pub fn draw(ui: &mut egui::Ui, head: &Headline) {
    ui.columns(2, |cols| {
        card(&mut cols[0], "Total Books", head.total_books.to_string());
        card(&mut cols[1], "Highest Rated", head.highest_rated());
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value).size(22.0).strong());
            });
        });
}
