//! Services
//!
//! Session orchestration and the console host collaborators it runs against.

pub mod analysis;
pub mod host;

pub use analysis::{AnalysisOrchestrator, RequestOptionsBuilder, SessionHost};
pub use host::{
    BufferedOutputSurface, ConsoleOutputSurface, FsReportWriter, InMemoryOptionsViewModel,
    ListingReportViewer, OptionsEdit, ProcessAnalysisEngine,
};
