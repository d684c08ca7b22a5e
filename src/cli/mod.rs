//! Command Line Interface (CLI) layer for HLSBATCH.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the scan-and-convert cycle.
//! It wires user-provided options to the underlying library functionality
//! exposed via `hlsbatch::api`.
//!
//! If you are embedding HLSBATCH into another application, prefer using
//! the high-level `hlsbatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
