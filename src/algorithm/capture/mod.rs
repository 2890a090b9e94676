//! Capture-pattern pruning, deduplication, and tallying

pub mod matrix;

pub use matrix::{CaptureMatrix, CaptureMatrixBuilder, CapturePattern};
