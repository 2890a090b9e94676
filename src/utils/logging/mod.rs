//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging setup and progress tracking.

pub mod progress;

// Re-export commonly used functions for convenience
pub use progress::{create_main_progress_bar, finish_progress_bar};

/// Initialize env_logger from the environment
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
