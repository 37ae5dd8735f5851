// src/dashboard/mod.rs

pub mod books;
pub mod chart;
pub mod controller;
pub mod report;
pub mod state;

pub use controller::{Controller, Dispatch};
pub use state::{Event, Notice, Phase, ViewState, reduce};
