use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::config::OptimizerConfig;
use crate::encode;
use crate::error::OptimizeError;
use crate::format::OutputFormat;
use crate::io;
use crate::orientation;
use crate::result::OptimizationResult;

/// Receives per-file and per-batch events while a batch runs. Implemented by
/// the caller; invoked from whatever thread runs the batch.
pub trait ProgressObserver {
    /// Batch completion as an integer percentage, 0-100, non-decreasing.
    fn on_progress(&mut self, percent: u8);
    /// A human-readable log line (resize notes, per-file summaries, errors).
    fn on_log(&mut self, message: &str);
    /// Fired exactly once, after the last file.
    fn on_done(&mut self);
}

/// New dimensions when either axis exceeds the bound: both axes scaled by
/// the largest ratio that brings both within it, rounded to nearest pixel.
/// Returns None when the image already fits (never upscales).
pub fn target_dimensions(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    if width <= max_dimension && height <= max_dimension {
        return None;
    }
    let ratio = f64::from(max_dimension) / f64::from(width.max(height));
    let new_width = (f64::from(width) * ratio).round().max(1.0) as u32;
    let new_height = (f64::from(height) * ratio).round().max(1.0) as u32;
    Some((new_width, new_height))
}

/// Optimize a single file: decode, fix orientation, resize if oversized,
/// re-encode in its own format, write the `_light` sibling. The original
/// file is never touched.
pub fn optimize_file(
    path: &Path,
    config: &OptimizerConfig,
) -> Result<OptimizationResult, OptimizeError> {
    let data = io::read_file(path)?;
    let format = OutputFormat::detect(&data);

    let mut img =
        image::load_from_memory(&data).map_err(|e| OptimizeError::Decode(e.to_string()))?;
    log::debug!(
        "{}: decoded {} {}x{}",
        path.display(),
        format.as_str(),
        img.width(),
        img.height()
    );

    if let Some(tag) = orientation::orientation_from_bytes(&data) {
        img = orientation::normalize(img, tag);
    }

    let mut notes = Vec::new();
    let (width, height) = (img.width(), img.height());
    if let Some((new_width, new_height)) = target_dimensions(width, height, config.max_dimension) {
        img = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
        notes.push(format!(
            "Resized from {width}x{height} to {new_width}x{new_height}"
        ));
    }

    let encoded = encode::encode(&img, format, config)?;
    let output_path = io::output_path(path, &config.suffix);
    io::write_file(&output_path, &encoded)?;
    log::debug!(
        "{}: wrote {} bytes to {}",
        path.display(),
        encoded.len(),
        output_path.display()
    );

    Ok(OptimizationResult {
        input_path: path.to_path_buf(),
        output_path,
        original_size: data.len() as u64,
        output_size: encoded.len() as u64,
        notes,
    })
}

/// Drives a batch over an ordered list of paths, sequentially, reporting to
/// an observer. Per-file failures are logged and the batch continues; the
/// caller is expected to run `process` off its main thread of execution.
pub struct BatchOptimizer {
    config: OptimizerConfig,
}

impl BatchOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Process every path in input order. Never fails: each file's outcome
    /// is reported through the observer, progress advances after every file
    /// whatever its outcome, and `on_done` fires exactly once at the end.
    pub fn process(&self, paths: &[PathBuf], observer: &mut dyn ProgressObserver) {
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            match optimize_file(path, &self.config) {
                Ok(result) => {
                    for note in &result.notes {
                        observer.on_log(&format!("  ↳ {note}"));
                    }
                    observer.on_log(&result.summary());
                }
                Err(err) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    log::warn!("failed to optimize {}: {err}", path.display());
                    observer.on_log(&format!("Error processing {name}: {err}"));
                }
            }

            let percent = ((index + 1) as f64 / total as f64 * 100.0) as u8;
            observer.on_progress(percent);
        }

        observer.on_done();
    }
}
