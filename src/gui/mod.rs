// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod icon;

pub use app::run;
