use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use mozjpeg::{ColorSpace, Compress};

use crate::config::OptimizerConfig;
use crate::error::OptimizeError;
use crate::format::OutputFormat;

/// Encode a decoded image back into its own format, applying the
/// format-specific size reductions.
pub fn encode(
    img: &DynamicImage,
    format: OutputFormat,
    config: &OptimizerConfig,
) -> Result<Vec<u8>, OptimizeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(img, config.jpeg_quality),
        OutputFormat::Png => encode_png(img),
        OutputFormat::Webp => encode_webp(img, config.webp_quality),
        OutputFormat::Other(fmt) => encode_generic(img, fmt),
    }
}

/// Composite a transparent image over an opaque white background, using the
/// image's own alpha as the blend mask. JPEG cannot represent alpha.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;

        let alpha = f32::from(a) / 255.0;
        let inv_alpha = 1.0 - alpha;
        let blend = |c: u8| (f32::from(c) * alpha + 255.0 * inv_alpha) as u8;

        output.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    output
}

/// Progressive JPEG via mozjpeg. Progressive output always carries
/// optimized Huffman tables.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, OptimizeError> {
    let (pixels, width, height, color_space) = if img.color().has_alpha() {
        let flat = flatten_onto_white(img);
        let (w, h) = flat.dimensions();
        (flat.into_raw(), w, h, ColorSpace::JCS_RGB)
    } else if matches!(img, DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_)) {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        (gray.into_raw(), w, h, ColorSpace::JCS_GRAYSCALE)
    } else {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        (rgb.into_raw(), w, h, ColorSpace::JCS_RGB)
    };

    let mut comp = Compress::new(color_space);
    comp.set_size(width as usize, height as usize);
    comp.set_quality(f32::from(quality));
    comp.set_progressive_mode();

    let mut comp = comp
        .start_compress(Vec::new())
        .map_err(|e| OptimizeError::Encode(e.to_string()))?;
    comp.write_scanlines(&pixels)
        .map_err(|e| OptimizeError::Encode(e.to_string()))?;
    comp.finish().map_err(|e| OptimizeError::Encode(e.to_string()))
}

/// Maximum-compression PNG encode followed by a lossless oxipng pass.
/// No color quantization; alpha survives untouched.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, OptimizeError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| OptimizeError::Encode(e.to_string()))?;

    let mut opts = oxipng::Options::from_preset(4);
    // Safe keeps the chunks that affect rendering (transparency included)
    opts.strip = oxipng::StripChunks::Safe;

    oxipng::optimize_from_memory(&buf, &opts).map_err(|e| OptimizeError::Encode(e.to_string()))
}

/// Lossy WebP at the highest-effort compression method.
fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, OptimizeError> {
    let mut config = webp::WebPConfig::new()
        .map_err(|_| OptimizeError::Encode("failed to initialize WebP config".to_string()))?;
    config.quality = f32::from(quality);
    config.method = 6;

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        webp::Encoder::from_rgba(rgba.as_raw(), w, h).encode_advanced(&config)
    } else {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        webp::Encoder::from_rgb(rgb.as_raw(), w, h).encode_advanced(&config)
    }
    .map_err(|e| OptimizeError::Encode(format!("WebP encoding failed: {e:?}")))?;

    Ok(encoded.to_vec())
}

/// Any other format round-trips through the `image` crate with defaults.
fn encode_generic(img: &DynamicImage, format: image::ImageFormat) -> Result<Vec<u8>, OptimizeError> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, format)
        .map_err(|e| OptimizeError::Encode(e.to_string()))?;
    Ok(cursor.into_inner())
}
