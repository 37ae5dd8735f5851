// src/gui/components/notice.rs
//
// Blocking failure notice. Covers the window until dismissed.

use eframe::egui::{self, Id, Modal, RichText};
use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(notice) = app.controller.state().notice.clone() else { return };

    let resp = Modal::new(Id::new("backend_notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(RichText::new(&notice.title).strong().size(16.0));
        ui.add_space(6.0);
        ui.label(RichText::new(&notice.detail).weak());
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if resp.inner || resp.should_close() {
        actions::dismiss(app);
    }
}
