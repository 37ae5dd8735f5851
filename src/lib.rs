// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod dashboard;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
