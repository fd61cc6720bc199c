//! Core types for upload decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::ImageExtent;

/// Error types for upload decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not one of the accepted upload formats.
    #[error("Unsupported upload format: expected JPEG or PNG")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A requested output size has a zero dimension.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Upload formats accepted by the cropper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFormat {
    Jpeg,
    Png,
}

impl UploadFormat {
    /// File extensions an upload picker should offer.
    pub const EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// The image crate's format for this upload.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            UploadFormat::Jpeg => image::ImageFormat::Jpeg,
            UploadFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Pixel dimensions as an [`ImageExtent`].
    pub fn extent(&self) -> ImageExtent {
        ImageExtent::new(self.width, self.height)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Check that the dimensions are non-zero and the buffer holds exactly
    /// `width * height` RGB pixels.
    pub fn check_buffer(&self) -> Result<(), DecodeError> {
        if self.width == 0 || self.height == 0 {
            return Err(DecodeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * 3;
        if self.pixels.len() != expected {
            return Err(DecodeError::CorruptedFile(format!(
                "pixel buffer holds {} bytes, expected {}",
                self.pixels.len(),
                expected
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_upload_format_mapping() {
        assert_eq!(UploadFormat::Jpeg.to_image_format(), image::ImageFormat::Jpeg);
        assert_eq!(UploadFormat::Png.to_image_format(), image::ImageFormat::Png);
        assert!(UploadFormat::EXTENSIONS.contains(&"jpeg"));
    }

    #[test]
    fn test_decoded_image_extent() {
        let img = DecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.extent(), ImageExtent::new(100, 50));
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_check_buffer() {
        assert!(DecodedImage::new(4, 2, vec![0u8; 24]).check_buffer().is_ok());

        let short = DecodedImage {
            width: 40,
            height: 40,
            pixels: vec![0u8; 30],
        };
        assert!(matches!(
            short.check_buffer(),
            Err(DecodeError::CorruptedFile(_))
        ));

        let empty = DecodedImage::new(0, 3, vec![]);
        assert!(matches!(
            empty.check_buffer(),
            Err(DecodeError::InvalidDimensions { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedFormat;
        assert_eq!(err.to_string(), "Unsupported upload format: expected JPEG or PNG");

        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");
    }
}
