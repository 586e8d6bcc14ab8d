//! Store statistics

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::StatsServiceError;
pub use service::*;
