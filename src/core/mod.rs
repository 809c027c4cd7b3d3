//! Core application types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`ImageTask`]: one source-to-derivative conversion unit
//! - [`CompressionSettings`]: size ceiling and starting quality
//! - [`OptimizationResult`]: what the compression loop produced
//! - [`FileOutcome`]: per-file result as tallied by the batch driver

mod task;
mod types;

pub use task::ImageTask;
pub use types::{CompressionSettings, FileOutcome, OptimizationResult};
