//! Console Host Adapters
//!
//! Concrete collaborators for running sessions from a terminal:
//! output surface, report viewer, options view model, report writer, and a
//! process-backed analysis engine.

pub mod console;
pub mod process_engine;
pub mod report_writer;
pub mod view_model;

pub use console::{BufferedOutputSurface, ConsoleOutputSurface, ListingReportViewer};
pub use process_engine::ProcessAnalysisEngine;
pub use report_writer::FsReportWriter;
pub use view_model::{InMemoryOptionsViewModel, OptionsEdit};
