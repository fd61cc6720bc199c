//! Upload decoding with format sniffing and EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, Orientation, UploadFormat};

/// Identify the upload format from its magic bytes.
///
/// Returns `None` for anything other than JPEG or PNG, regardless of what
/// the file name claimed.
pub fn sniff_format(bytes: &[u8]) -> Option<UploadFormat> {
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Jpeg) => Some(UploadFormat::Jpeg),
        Ok(image::ImageFormat::Png) => Some(UploadFormat::Png),
        _ => None,
    }
}

/// Decode an uploaded photo to RGB, applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as received from the upload
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data, upright as the camera intended.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not JPEG or PNG.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_upload(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = sniff_format(bytes).ok_or(DecodeError::UnsupportedFormat)?;

    // Read orientation before the pixel data is decoded
    let orientation = extract_orientation(bytes);

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented_img = apply_orientation(img, orientation);
    let rgb_img = oriented_img.into_rgb8();

    log::debug!(
        "decoded {:?} upload: {}x{} ({:?})",
        format,
        rgb_img.width(),
        rgb_img.height(),
        orientation
    );

    Ok(DecodedImage::from_rgb_image(rgb_img))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from upload bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
