// src/gui/components/filter_bar.rs
use eframe::egui;
use crate::{core::RatingFilter, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let active = app.controller.state().active_filter;
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for choice in RatingFilter::choices() {
            if ui.selectable_label(choice == active, choice.to_string()).clicked() {
                clicked = Some(choice);
            }
        }
    });

    if let Some(f) = clicked {
        actions::filter(app, f);
    }
}
