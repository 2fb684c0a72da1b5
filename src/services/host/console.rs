//! Console Output Surface & Report Viewer
//!
//! Terminal stand-ins for the host's output pane and report viewer, plus a
//! buffered surface that keeps the written lines in memory.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portability_session_core::{CoreResult, OutputSurface, ReportViewer};

const OUTPUT_HEADER: &str = "==== Portability Analysis ====";

/// Output surface that prints to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutputSurface {
    shown: AtomicBool,
}

impl ConsoleOutputSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OutputSurface for ConsoleOutputSurface {
    async fn show(&self) -> CoreResult<()> {
        // header only once per process
        if !self.shown.swap(true, Ordering::SeqCst) {
            println!("{}", OUTPUT_HEADER);
        }
        Ok(())
    }

    fn write_line(&self, text: &str) {
        println!("{}", text);
    }
}

/// Output surface that records lines in memory.
#[derive(Debug, Default)]
pub struct BufferedOutputSurface {
    lines: Mutex<Vec<String>>,
    show_count: AtomicUsize,
}

impl BufferedOutputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// How many times `show()` was called.
    pub fn show_count(&self) -> usize {
        self.show_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutputSurface for BufferedOutputSurface {
    async fn show(&self) -> CoreResult<()> {
        self.show_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write_line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

/// Report viewer that lists report paths on an output surface.
pub struct ListingReportViewer {
    output: Arc<dyn OutputSurface>,
}

impl ListingReportViewer {
    pub fn new(output: Arc<dyn OutputSurface>) -> Self {
        Self { output }
    }
}

#[async_trait]
impl ReportViewer for ListingReportViewer {
    async fn view(&self, paths: &[PathBuf]) -> CoreResult<()> {
        if paths.is_empty() {
            self.output.write_line("No reports were generated.");
            return Ok(());
        }
        for path in paths {
            self.output.write_line(&format!("Report: {}", path.display()));
        }
        Ok(())
    }
}
