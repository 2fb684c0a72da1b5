//! Storage Layer
//!
//! Loads the host configuration from JSON.

pub mod config;

pub use config::*;
