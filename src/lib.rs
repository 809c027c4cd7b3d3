// Module declarations in dependency order
pub mod core;
pub mod pages;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{CompressionSettings, FileOutcome, ImageTask, OptimizationResult};
pub use pages::{SERVICE_PAGES, ServiceRecord};
pub use processing::{BatchConfig, BatchSummary, run_batch};
pub use utils::{OptimizerError, OptimizerResult};

// This library file exposes the crate for integration tests and external
// consumers. The actual application entry point is in main.rs.
