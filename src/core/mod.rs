// src/core/mod.rs

pub mod error;
pub mod model;
pub mod net;

pub use error::BackendError;
pub use model::{Book, Rating, RatingFilter, ScrapeSummary};
pub use net::{Gateway, HttpGateway};
