#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Longest edge above which images are scaled down
    pub max_dimension: u32,
    /// JPEG re-encode quality 0-100 (lower = smaller file, worse quality)
    pub jpeg_quality: u8,
    /// WebP re-encode quality 0-100
    pub webp_quality: u8,
    /// Inserted before the extension of every output file
    pub suffix: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1920,
            jpeg_quality: 60,
            webp_quality: 75,
            suffix: "_light".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_shipped_constants() {
        let config = OptimizerConfig::default();
        assert_eq!(config.max_dimension, 1920);
        assert_eq!(config.jpeg_quality, 60);
        assert_eq!(config.webp_quality, 75);
        assert_eq!(config.suffix, "_light");
    }
}
