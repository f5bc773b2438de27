use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::registration::domain::still_encoder::{StillEncodeError, StillEncoder};
use crate::shared::constants::STILL_JPEG_QUALITY;
use crate::shared::frame::Frame;

pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encodes stills as `data:image/jpeg;base64,...` URIs.
pub struct JpegStillEncoder {
    quality: u8,
}

impl JpegStillEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for JpegStillEncoder {
    fn default() -> Self {
        Self::new(STILL_JPEG_QUALITY)
    }
}

impl StillEncoder for JpegStillEncoder {
    fn encode(&self, frame: &Frame) -> Result<String, StillEncodeError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(StillEncodeError::EmptyFrame {
                width: frame.width(),
                height: frame.height(),
            });
        }

        let mut jpeg = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut jpeg, self.quality)
            .write_image(
                frame.data(),
                frame.width(),
                frame.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| StillEncodeError::Encode(Box::new(e)))?;

        let mut uri = String::from(JPEG_DATA_URI_PREFIX);
        STANDARD.encode_string(jpeg.get_ref(), &mut uri);
        Ok(uri)
    }
}
