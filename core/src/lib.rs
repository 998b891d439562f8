//! Batch image optimization: decode, EXIF orientation fix, bounded resize,
//! format-preserving re-encode, metadata stripping.
//!
//! The entry points are [`optimizer::BatchOptimizer`] for driving a whole
//! batch against a [`optimizer::ProgressObserver`], and
//! [`optimizer::optimize_file`] for a single file.

pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod io;
pub mod optimizer;
pub mod orientation;
pub mod result;

pub use config::OptimizerConfig;
pub use error::OptimizeError;
pub use optimizer::{optimize_file, BatchOptimizer, ProgressObserver};
pub use result::OptimizationResult;
