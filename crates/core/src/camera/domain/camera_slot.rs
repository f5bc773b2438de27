use crate::camera::domain::camera_source::{
    CameraError, CameraSource, CameraStream, CaptureConstraints,
};
use crate::shared::frame::Frame;

/// Holds at most one live stream on behalf of a single view.
///
/// Release happens on [`CameraSlot::release`] and again implicitly on drop, so
/// every exit path of the owning view gives the device back.
pub struct CameraSlot {
    owner: &'static str,
    stream: Option<Box<dyn CameraStream>>,
}

impl CameraSlot {
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            stream: None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.stream.is_some()
    }

    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.stream.as_ref().map(|s| s.resolution())
    }

    /// Acquires a stream into the empty slot. Refuses while a stream is held.
    pub fn acquire(
        &mut self,
        source: &dyn CameraSource,
        constraints: &CaptureConstraints,
    ) -> Result<(), CameraError> {
        if self.stream.is_some() {
            return Err(CameraError::AlreadyHeld);
        }
        match source.acquire(constraints) {
            Ok(stream) => {
                let (w, h) = stream.resolution();
                log::info!("{}: camera acquired at {w}x{h}", self.owner);
                self.stream = Some(stream);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}: error accessing camera: {e}", self.owner);
                Err(e)
            }
        }
    }

    /// Drops the held stream, if any. Returns whether a stream was released.
    pub fn release(&mut self) -> bool {
        match self.stream.take() {
            Some(stream) => {
                drop(stream);
                log::info!("{}: camera released", self.owner);
                true
            }
            None => false,
        }
    }

    pub fn read_frame(&mut self) -> Result<Frame, CameraError> {
        match self.stream.as_mut() {
            Some(stream) => stream.read_frame(),
            None => Err(CameraError::NotAcquired),
        }
    }
}

impl Drop for CameraSlot {
    fn drop(&mut self) {
        self.release();
    }
}
