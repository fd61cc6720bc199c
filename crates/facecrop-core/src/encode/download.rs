//! The file offered to the user after cropping.

use super::{encode_image, EncodeError};
use crate::decode::DecodedImage;

/// File name suggested to the browser for the cropped face.
pub const DOWNLOAD_FILE_NAME: &str = "face_crop.jpg";

/// MIME type of the download.
pub const DOWNLOAD_MIME_TYPE: &str = "image/jpeg";

/// An encoded image ready to be handed to the download surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Encode `image` as a JPEG download.
    pub fn jpeg(image: &DecodedImage, quality: u8) -> Result<Self, EncodeError> {
        Ok(Self {
            file_name: DOWNLOAD_FILE_NAME,
            mime_type: DOWNLOAD_MIME_TYPE,
            bytes: encode_image(image, quality)?,
        })
    }
}
