// src/gui/actions/filter.rs
use crate::{core::RatingFilter, gui::app::App};

/// Filter bar click. Re-selecting the active filter fetches again.
pub fn filter(app: &mut App, filter: RatingFilter) {
    let prev = app.controller.state().active_filter;
    logd!("UI: Filter click {} → {}", prev, filter);
    app.controller.select_filter(filter);
}
