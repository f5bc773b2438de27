use thiserror::Error;

use crate::shared::constants::{IDEAL_CAPTURE_HEIGHT, IDEAL_CAPTURE_WIDTH};
use crate::shared::frame::Frame;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera access was denied")]
    PermissionDenied,
    #[error("no camera is available: {0}")]
    Unavailable(String),
    #[error("a camera stream is already held by this view")]
    AlreadyHeld,
    #[error("no camera stream is active")]
    NotAcquired,
    #[error("failed to read a frame: {0}")]
    Read(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    User,
    Environment,
}

/// What a view asks of the capture device. Video only; audio is never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub facing: FacingMode,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            ideal_width: IDEAL_CAPTURE_WIDTH,
            ideal_height: IDEAL_CAPTURE_HEIGHT,
            facing: FacingMode::User,
        }
    }
}

/// Domain interface for a capture device.
///
/// Acquiring yields an exclusively-owned stream; dropping the stream releases
/// the device.
pub trait CameraSource: Send + Sync {
    fn acquire(&self, constraints: &CaptureConstraints) -> Result<Box<dyn CameraStream>, CameraError>;
}

/// A live, exclusively-owned video stream.
pub trait CameraStream: Send {
    /// Negotiated resolution, which may differ from the ideal.
    fn resolution(&self) -> (u32, u32);

    fn read_frame(&mut self) -> Result<Frame, CameraError>;
}
