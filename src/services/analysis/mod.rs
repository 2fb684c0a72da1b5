//! Analysis Session Services
//!
//! - `options_builder` - composes the immutable request from the options UI
//! - `orchestrator` - runs a complete session
//! - `messages` - advisory lines written to the output surface

pub mod messages;
pub mod options_builder;
pub mod orchestrator;

pub use messages::Advisory;
pub use options_builder::{compose_flags, plan_request, RequestInputs, RequestOptionsBuilder, RequestPlan};
pub use orchestrator::{AnalysisOrchestrator, SessionHost};
