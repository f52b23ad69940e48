//! Browser-side services

pub mod api;

pub use api::{alert, api_client};
