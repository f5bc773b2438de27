use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum StillEncodeError {
    #[error("frame {width}x{height} has no pixels")]
    EmptyFrame { width: u32, height: u32 },
    #[error("image encoding failed: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A single still taken from the live feed, kept both as pixels for preview
/// and as a self-contained encoded string for storage.
#[derive(Debug, Clone)]
pub struct CapturedStill {
    pub frame: Frame,
    pub data_uri: String,
}

/// Turns a live frame into an inline-displayable image string.
pub trait StillEncoder: Send {
    fn encode(&self, frame: &Frame) -> Result<String, StillEncodeError>;
}
