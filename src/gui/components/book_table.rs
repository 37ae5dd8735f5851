// src/gui/components/book_table.rs
//
// First VISIBLE_BOOKS books in received order, plus the "Showing N of M"
// line when the list is longer. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{
    dashboard::books::{BookListView, stars},
    gui::app::App,
};

const ROW_H: f32 = 22.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let books = &app.controller.state().books;
    let view = BookListView::new(books);

    if view.shown.is_empty() {
        ui.label(RichText::new("No books for this filter").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .header(24.0, |mut header| {
            for h in ["Title", "Price", "Rating", "Link"] {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(ROW_H, view.shown.len(), |mut row| {
                let Some(book) = view.shown.get(row.index()) else { return };
                row.col(|ui| { ui.label(&book.title).on_hover_text(&book.title); });
                row.col(|ui| { ui.label(&book.price); });
                row.col(|ui| { ui.label(stars(book.rating)); });
                row.col(|ui| { ui.hyperlink_to("View Book", &book.url); });
            });
        });

    if let Some(more) = view.overflow_notice() {
        ui.add_space(6.0);
        ui.label(RichText::new(more).weak());
    }
}
