use std::sync::Arc;

use thiserror::Error;

use crate::camera::domain::camera_slot::CameraSlot;
use crate::camera::domain::camera_source::{CameraError, CameraSource, CaptureConstraints};
use crate::registration::domain::face_registry::{FaceRegistry, RegisteredFace};
use crate::registration::domain::still_encoder::{CapturedStill, StillEncodeError, StillEncoder};
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("the wizard is not on the capture step")]
    NotCapturing,
    #[error("a still has already been captured")]
    AlreadyCaptured,
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error(transparent)]
    Encode(#[from] StillEncodeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    #[default]
    Info,
    Capture,
}

/// Two-step modal wizard: enter a name, then capture one still.
///
/// The camera is held only while on the capture step. Closing, whether
/// explicit or after a successful registration, returns every field to its
/// initial value and releases the camera.
pub struct RegistrationWizard {
    camera_source: Arc<dyn CameraSource>,
    encoder: Box<dyn StillEncoder>,
    camera: CameraSlot,
    constraints: CaptureConstraints,
    open: bool,
    step: RegistrationStep,
    name: String,
    captured: Option<CapturedStill>,
    camera_error: Option<CameraError>,
}

impl RegistrationWizard {
    pub fn new(camera_source: Arc<dyn CameraSource>, encoder: Box<dyn StillEncoder>) -> Self {
        Self {
            camera_source,
            encoder,
            camera: CameraSlot::new("registration"),
            constraints: CaptureConstraints::default(),
            open: false,
            step: RegistrationStep::Info,
            name: String::new(),
            captured: None,
            camera_error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn captured(&self) -> Option<&CapturedStill> {
        self.captured.as_ref()
    }

    pub fn is_camera_live(&self) -> bool {
        self.camera.is_held()
    }

    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera_error.as_ref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.open {
            self.name = name.into();
        }
    }

    pub fn can_advance(&self) -> bool {
        self.open && self.step == RegistrationStep::Info && !self.name.trim().is_empty()
    }

    /// Moves to the capture step and acquires the camera once. A failed
    /// acquisition still advances; the error is kept for display and
    /// `capture` will report it.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = RegistrationStep::Capture;
        self.camera_error = self
            .camera
            .acquire(self.camera_source.as_ref(), &self.constraints)
            .err();
        true
    }

    /// The live preview frame while on the capture step without a still.
    pub fn live_frame(&mut self) -> Result<Frame, RegistrationError> {
        if self.step != RegistrationStep::Capture || self.captured.is_some() {
            return Err(RegistrationError::NotCapturing);
        }
        Ok(self.camera.read_frame()?)
    }

    pub fn capture(&mut self) -> Result<(), RegistrationError> {
        if !self.open || self.step != RegistrationStep::Capture {
            return Err(RegistrationError::NotCapturing);
        }
        if self.captured.is_some() {
            return Err(RegistrationError::AlreadyCaptured);
        }
        let frame = self.camera.read_frame()?;
        let data_uri = self.encoder.encode(&frame)?;
        log::debug!(
            "captured {}x{} still ({} bytes encoded)",
            frame.width(),
            frame.height(),
            data_uri.len()
        );
        self.captured = Some(CapturedStill { frame, data_uri });
        Ok(())
    }

    /// Discards the still and returns to the live view. The camera stays open.
    pub fn retake(&mut self) {
        self.captured = None;
    }

    pub fn can_register(&self) -> bool {
        self.open && !self.name.trim().is_empty() && self.captured.is_some()
    }

    /// Appends the subject to `registry` and closes the wizard.
    pub fn register(&mut self, registry: &mut FaceRegistry) -> Option<RegisteredFace> {
        if !self.can_register() {
            return None;
        }
        let still = self.captured.take()?;
        let face = registry
            .register(self.name.trim().to_owned(), still.data_uri)
            .clone();
        self.close();
        Some(face)
    }

    pub fn close(&mut self) {
        self.open = false;
        self.step = RegistrationStep::Info;
        self.name.clear();
        self.captured = None;
        self.camera_error = None;
        self.camera.release();
    }
}
