// src/utils/mod.rs
pub mod config;
pub mod error;
pub mod logging;
pub mod match_debug;

pub use error::AppError; // Re-export main error type for convenience
