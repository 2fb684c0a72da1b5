//! Integration Tests Module
//!
//! Covers complete analysis sessions, request composition from the options
//! view model, and the console host running a real analyzer process.



// Request options builder against the in-memory view model
mod options_builder_test;

// Console host with a process-backed analyzer
mod console_host_test;
