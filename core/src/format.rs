/// Output format for a processed image. Always the input's own format:
/// the optimizer never converts across formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Webp,
    /// Any other format the `image` crate can round-trip (GIF, BMP, TIFF, ...)
    Other(image::ImageFormat),
}

impl OutputFormat {
    /// Sniff the format from file content. Falls back to JPEG when the
    /// bytes carry no recognizable signature.
    pub fn detect(data: &[u8]) -> Self {
        match image::guess_format(data) {
            Ok(image::ImageFormat::Jpeg) | Err(_) => OutputFormat::Jpeg,
            Ok(image::ImageFormat::Png) => OutputFormat::Png,
            Ok(image::ImageFormat::WebP) => OutputFormat::Webp,
            Ok(other) => OutputFormat::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::Webp => "WebP",
            OutputFormat::Other(fmt) => fmt.extensions_str().first().copied().unwrap_or("image"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_signature() {
        assert_eq!(
            OutputFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
            OutputFormat::Jpeg
        );
        assert_eq!(
            OutputFormat::detect(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::detect(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
            OutputFormat::Webp
        );
        assert_eq!(
            OutputFormat::detect(b"GIF89a\x01\x00\x01\x00"),
            OutputFormat::Other(image::ImageFormat::Gif)
        );
    }

    #[test]
    fn unknown_bytes_fall_back_to_jpeg() {
        assert_eq!(OutputFormat::detect(b"not an image"), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::detect(&[]), OutputFormat::Jpeg);
    }
}
