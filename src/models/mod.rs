//! Data Models
//!
//! Data structures owned by the console host.

pub mod settings;

pub use settings::*;
