use thiserror::Error;

use crate::recognition::domain::detected_face::DetectedFace;
use crate::registration::domain::face_registry::RegisteredFace;
use crate::settings::settings_store::Settings;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("detector rejected frame {sequence}: {reason}")]
    InvalidFrame { sequence: u64, reason: String },
}

/// Result of one recognition pass.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Recognized(Vec<DetectedFace>),
    Failed,
}

/// Domain interface for recognition.
///
/// `known` is the registered-subject list, in registration order, for
/// labelling. Implementations may keep state (an RNG, a tracker), hence
/// `&mut self`.
pub trait RecognitionDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        settings: &Settings,
        known: &[RegisteredFace],
    ) -> Result<DetectionOutcome, DetectionError>;
}
