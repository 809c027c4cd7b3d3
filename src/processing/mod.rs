//! Image discovery, compression, and the batch driver.

pub mod batch;
pub mod compress;
pub mod discovery;
pub mod encode;

pub use batch::{BatchConfig, BatchSummary, run_batch};
pub use compress::{EncodedDerivative, compress_to_budget, optimize_file};
pub use discovery::{destination_for, discover_images};
