use std::sync::Arc;

use crate::camera::domain::camera_slot::CameraSlot;
use crate::camera::domain::camera_source::{CameraError, CameraSource, CaptureConstraints};
use crate::detection::domain::recognition_detector::{DetectionOutcome, RecognitionDetector};
use crate::recognition::domain::detected_face::DetectedFace;
use crate::recognition::domain::recognition_status::RecognitionStatus;
use crate::registration::domain::face_registry::RegisteredFace;
use crate::settings::settings_store::Settings;
use crate::shared::frame::Frame;

/// Identifies the one scan completion a session is waiting for.
///
/// Tickets are never reused, so a completion scheduled before a `stop()` can
/// never be mistaken for the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanTicket(u64);

/// Recognition state machine for the main camera view.
///
/// ```text
/// idle ──start──▶ scanning ──complete──▶ recognized | failed
///   ▲                 │                        │
///   └──── stop / reset ┴────────────────────────┘
/// ```
///
/// The session owns the main view's camera handle: `start` acquires it,
/// `stop` (or dropping the session) releases it.
pub struct RecognitionSession {
    camera_source: Arc<dyn CameraSource>,
    detector: Box<dyn RecognitionDetector>,
    camera: CameraSlot,
    constraints: CaptureConstraints,
    active: bool,
    status: RecognitionStatus,
    detected_faces: Vec<DetectedFace>,
    next_ticket: u64,
    pending: Option<ScanTicket>,
    camera_error: Option<CameraError>,
}

impl RecognitionSession {
    pub fn new(camera_source: Arc<dyn CameraSource>, detector: Box<dyn RecognitionDetector>) -> Self {
        Self {
            camera_source,
            detector,
            camera: CameraSlot::new("recognition view"),
            constraints: CaptureConstraints::default(),
            active: false,
            status: RecognitionStatus::Idle,
            detected_faces: Vec::new(),
            next_ticket: 0,
            pending: None,
            camera_error: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn status(&self) -> RecognitionStatus {
        self.status
    }

    pub fn detected_faces(&self) -> &[DetectedFace] {
        &self.detected_faces
    }

    pub fn is_camera_live(&self) -> bool {
        self.camera.is_held()
    }

    /// Negotiated capture size while the camera is held.
    pub fn camera_resolution(&self) -> Option<(u32, u32)> {
        self.camera.resolution()
    }

    /// The last camera acquisition failure, cleared by the next successful start.
    pub fn camera_error(&self) -> Option<&CameraError> {
        self.camera_error.as_ref()
    }

    /// Begins a session and returns the ticket the caller must hand back to
    /// [`complete_scan`](Self::complete_scan) once the scan delay elapses.
    ///
    /// Returns `None` without touching any state when already active. When the
    /// camera cannot be acquired the session stays inactive and the status
    /// becomes `Failed`, so the UI never waits on a scan that cannot finish.
    pub fn start(&mut self) -> Option<ScanTicket> {
        if self.active {
            return None;
        }

        if let Err(e) = self
            .camera
            .acquire(self.camera_source.as_ref(), &self.constraints)
        {
            self.camera_error = Some(e);
            self.detected_faces.clear();
            self.status = RecognitionStatus::Failed;
            self.pending = None;
            return None;
        }

        self.camera_error = None;
        self.active = true;
        self.status = RecognitionStatus::Scanning;
        self.detected_faces.clear();

        let ticket = ScanTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        log::info!("recognition started (scan {})", ticket.0);
        Some(ticket)
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.status = RecognitionStatus::Idle;
        self.detected_faces.clear();
        self.pending = None;
        if self.camera.release() {
            log::info!("recognition stopped");
        }
    }

    /// Clears results and returns to idle. The camera, the `active` flag and
    /// a scan still in flight are left alone, so that scan still resolves.
    pub fn reset(&mut self) {
        self.detected_faces.clear();
        self.status = RecognitionStatus::Idle;
    }

    /// Resolves the pending scan. Returns `false` if `ticket` is stale, in
    /// which case nothing changes.
    pub fn complete_scan(
        &mut self,
        ticket: ScanTicket,
        settings: &Settings,
        known: &[RegisteredFace],
    ) -> bool {
        if self.pending != Some(ticket) {
            log::debug!("ignoring stale scan {}", ticket.0);
            return false;
        }
        self.pending = None;

        let outcome = match self.camera.read_frame() {
            Ok(frame) => match self.detector.detect(&frame, settings, known) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("detection failed: {e}");
                    DetectionOutcome::Failed
                }
            },
            Err(e) => {
                log::warn!("no frame for scan {}: {e}", ticket.0);
                DetectionOutcome::Failed
            }
        };
        self.apply(outcome);
        true
    }

    /// Reads the next live frame for display.
    pub fn read_frame(&mut self) -> Result<Frame, CameraError> {
        self.camera.read_frame()
    }

    fn apply(&mut self, outcome: DetectionOutcome) {
        match outcome {
            DetectionOutcome::Recognized(faces) if !faces.is_empty() => {
                log::info!("recognized {} face(s)", faces.len());
                self.detected_faces = faces;
                self.status = RecognitionStatus::Recognized;
            }
            _ => {
                log::info!("recognition failed");
                self.detected_faces.clear();
                self.status = RecognitionStatus::Failed;
            }
        }
    }
}
