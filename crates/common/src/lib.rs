//! Shared helpers for the feeding service crates.

pub mod types;
pub mod utils;
