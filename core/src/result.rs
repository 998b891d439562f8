use std::path::PathBuf;

/// Outcome of optimizing a single file. Immutable once produced; consumed
/// only for logging.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub original_size: u64,
    pub output_size: u64,
    /// Notes collected along the way, e.g. the resize note
    pub notes: Vec<String>,
}

impl OptimizationResult {
    pub fn percent_saved(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        100.0 - (self.output_size as f64 / self.original_size as f64 * 100.0)
    }

    /// One-line per-file summary, sizes in KB with one decimal place.
    pub fn summary(&self) -> String {
        let name = self
            .input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.display().to_string());
        format!(
            "✔ {}: {:.1}KB -> {:.1}KB ({:.1}% saved)",
            name,
            self.original_size as f64 / 1024.0,
            self.output_size as f64 / 1024.0,
            self.percent_saved()
        )
    }
}
