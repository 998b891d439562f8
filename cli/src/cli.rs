use std::path::PathBuf;

use clap::Parser;

use light_img_core::OptimizerConfig;

/// Produce size-reduced `_light` copies of image files next to the originals
#[derive(Debug, Parser)]
#[command(name = "light_img", version, about)]
pub struct Cli {
    /// Image files or directories to optimize
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Longest edge above which images are scaled down
    #[arg(long, default_value_t = 1920)]
    pub max_dimension: u32,

    /// JPEG re-encode quality 0-100
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub jpeg_quality: u8,

    /// WebP re-encode quality 0-100
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub webp_quality: u8,

    /// Suffix inserted before the extension of output files
    #[arg(long, default_value = "_light")]
    pub suffix: String,

    /// Recurse into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> OptimizerConfig {
        OptimizerConfig {
            max_dimension: self.max_dimension,
            jpeg_quality: self.jpeg_quality,
            webp_quality: self.webp_quality,
            suffix: self.suffix.clone(),
        }
    }
}
