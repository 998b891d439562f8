use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OptimizeError;

/// Derive the output path for an input file: the configured suffix is
/// inserted between the file stem and the extension, in the same directory.
/// `photo.jpg` → `photo_light.jpg`; an extension-less file gets the bare
/// suffix appended.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(file_name)
}

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, OptimizeError> {
    fs::read(path).map_err(|e| OptimizeError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), OptimizeError> {
    fs::write(path, data).map_err(|e| OptimizeError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(
            output_path(Path::new("/photos/IMG_001.jpg"), "_light"),
            PathBuf::from("/photos/IMG_001_light.jpg")
        );
        assert_eq!(
            output_path(Path::new("banner.PNG"), "_light"),
            PathBuf::from("banner_light.PNG")
        );
    }

    #[test]
    fn extension_less_file_gets_bare_suffix() {
        assert_eq!(
            output_path(Path::new("/tmp/scan"), "_light"),
            PathBuf::from("/tmp/scan_light")
        );
    }

    #[test]
    fn dotted_stem_keeps_inner_dots() {
        assert_eq!(
            output_path(Path::new("archive.tar.png"), "_light"),
            PathBuf::from("archive.tar_light.png")
        );
    }
}
