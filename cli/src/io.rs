use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff",
];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand the CLI inputs into an ordered list of files. Explicit file
/// arguments pass through untouched, so a non-image surfaces as a per-file
/// decode error rather than being silently dropped; directories are walked
/// and filtered by extension.
pub fn collect_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let max_depth = if recursive { usize::MAX } else { 1 };
            for entry in WalkDir::new(input).max_depth(max_depth).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if has_image_extension(entry.path()) {
                    files.push(entry.into_path());
                } else {
                    log::debug!("skipping {} (not an image extension)", entry.path().display());
                }
            }
        } else {
            bail!("{} is not a file or directory", input.display());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_files_pass_through_unfiltered() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("notes.txt");
        fs::write(&odd, b"hello").unwrap();

        let files = collect_inputs(&[odd.clone()], false).unwrap();
        assert_eq!(files, vec![odd]);
    }

    #[test]
    fn directories_filter_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("b.JPG"), b"").unwrap();
        fs::write(dir.path().join("skip.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.webp"), b"").unwrap();

        let flat = collect_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(flat.len(), 2);

        let deep = collect_inputs(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(collect_inputs(&[PathBuf::from("/no/such/thing")], false).is_err());
    }
}
