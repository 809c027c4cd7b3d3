pub mod error;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult};
pub use formats::{INPUT_EXTENSIONS, OUTPUT_EXTENSION, is_candidate_image};
pub use fs::{ensure_parent_dir, modified_time};
