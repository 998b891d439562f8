use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;

/// Read the EXIF orientation tag (1-8) from raw image bytes.
/// Returns None when the file carries no EXIF segment or no orientation tag.
pub fn orientation_from_bytes(data: &[u8]) -> Option<u32> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(data))
        .ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    field.value.get_uint(0)
}

/// Rewrite pixel data to the upright orientation implied by the EXIF tag,
/// so sideways/upside-down photos from rotated capture display correctly.
/// Unknown or absent values leave the image untouched.
pub fn normalize(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn marker_image() -> DynamicImage {
        // 3x2 with a red marker in the top-left corner
        let mut img = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn rotation_tags_swap_dimensions() {
        for tag in [5, 6, 7, 8] {
            let out = normalize(marker_image(), tag);
            assert_eq!((out.width(), out.height()), (2, 3), "tag {tag}");
        }
        for tag in [1, 2, 3, 4] {
            let out = normalize(marker_image(), tag);
            assert_eq!((out.width(), out.height()), (3, 2), "tag {tag}");
        }
    }

    #[test]
    fn mirror_tag_flips_horizontally() {
        let out = normalize(marker_image(), 2).to_rgb8();
        assert_eq!(out.get_pixel(2, 0), &Rgb([255, 0, 0]));
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn rotate_90_cw_moves_top_left_to_top_right() {
        let out = normalize(marker_image(), 6).to_rgb8();
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn unknown_tag_is_a_no_op() {
        let out = normalize(marker_image(), 0).to_rgb8();
        assert_eq!(out.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn plain_png_has_no_orientation() {
        let mut buf = Cursor::new(Vec::new());
        marker_image()
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        assert_eq!(orientation_from_bytes(buf.get_ref()), None);
    }
}
