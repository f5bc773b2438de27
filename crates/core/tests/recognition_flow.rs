use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use facerec_core::camera::domain::camera_source::{
    CameraError, CameraSource, CameraStream, CaptureConstraints,
};
use facerec_core::camera::infrastructure::synthetic_camera::SyntheticCamera;
use facerec_core::detection::infrastructure::random_detector::RandomDetector;
use facerec_core::recognition::domain::recognition_session::{RecognitionSession, ScanTicket};
use facerec_core::recognition::domain::recognition_status::RecognitionStatus;
use facerec_core::recognition::infrastructure::scan_timer::ScanTimer;
use facerec_core::registration::domain::face_registry::FaceRegistry;
use facerec_core::registration::domain::registration_wizard::RegistrationWizard;
use facerec_core::registration::infrastructure::jpeg_still_encoder::{
    JpegStillEncoder, JPEG_DATA_URI_PREFIX,
};
use facerec_core::settings::settings_store::SettingsStore;
use facerec_core::shared::frame::Frame;

/// Wraps the synthetic device and counts live streams.
#[derive(Clone)]
struct TrackedCamera {
    inner: SyntheticCamera,
    live: Arc<AtomicUsize>,
}

impl TrackedCamera {
    fn new() -> Self {
        Self {
            inner: SyntheticCamera::new(64, 36),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

struct TrackedStream {
    inner: Box<dyn CameraStream>,
    live: Arc<AtomicUsize>,
}

impl CameraStream for TrackedStream {
    fn resolution(&self) -> (u32, u32) {
        self.inner.resolution()
    }

    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        self.inner.read_frame()
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CameraSource for TrackedCamera {
    fn acquire(&self, constraints: &CaptureConstraints) -> Result<Box<dyn CameraStream>, CameraError> {
        let inner = self.inner.acquire(constraints)?;
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TrackedStream {
            inner,
            live: self.live.clone(),
        }))
    }
}

fn poll_until(timer: &ScanTimer, limit: Duration) -> Option<ScanTicket> {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if let Some(ticket) = timer.poll() {
            return Some(ticket);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

#[test]
fn registered_names_label_detections() {
    let camera = TrackedCamera::new();
    let source: Arc<dyn CameraSource> = Arc::new(camera.clone());
    let mut registry = FaceRegistry::new();
    let mut wizard = RegistrationWizard::new(source.clone(), Box::new(JpegStillEncoder::default()));

    wizard.open();
    wizard.set_name("Ada");
    assert!(wizard.advance());
    wizard.capture().unwrap();
    let face = wizard.register(&mut registry).unwrap();

    assert!(face.image_data.starts_with(JPEG_DATA_URI_PREFIX));
    assert_eq!(registry.len(), 1);
    assert!(!wizard.is_open());
    assert_eq!(camera.live(), 0);

    let mut settings = SettingsStore::default();
    settings.open_dialog();
    settings.set_score_threshold(0.0);
    settings.save();

    let mut session = RecognitionSession::new(source, Box::new(RandomDetector::seeded(11)));
    let ticket = session.start().unwrap();
    assert!(session.complete_scan(ticket, settings.current(), registry.faces()));

    assert_eq!(session.status(), RecognitionStatus::Recognized);
    assert_eq!(session.detected_faces()[0].name, "Ada");
    for face in session.detected_faces() {
        assert!(face.confidence >= 0.0 && face.confidence < 1.0);
    }
}

#[test]
fn timer_completion_drives_session() {
    let camera = TrackedCamera::new();
    let mut session = RecognitionSession::new(Arc::new(camera.clone()), Box::new(RandomDetector::seeded(5)));
    let settings = SettingsStore::default();

    let ticket = session.start().unwrap();
    let timer = ScanTimer::spawn(Duration::from_millis(20), ticket);
    assert_eq!(session.status(), RecognitionStatus::Scanning);

    let fired = poll_until(&timer, Duration::from_secs(2)).unwrap();
    assert!(session.complete_scan(fired, settings.current(), &[]));
    assert!(matches!(
        session.status(),
        RecognitionStatus::Recognized | RecognitionStatus::Failed
    ));
}

#[test]
fn stop_before_timer_fires_leaves_session_idle() {
    let camera = TrackedCamera::new();
    let mut session = RecognitionSession::new(Arc::new(camera.clone()), Box::new(RandomDetector::seeded(5)));
    let settings = SettingsStore::default();

    let ticket = session.start().unwrap();
    let timer = ScanTimer::spawn(Duration::from_millis(40), ticket);
    session.stop();
    timer.cancel();

    assert!(poll_until(&timer, Duration::from_millis(150)).is_none());
    // Even a ticket that slipped through is refused.
    assert!(!session.complete_scan(ticket, settings.current(), &[]));
    assert_eq!(session.status(), RecognitionStatus::Idle);
    assert_eq!(camera.live(), 0);
}

#[test]
fn reset_mid_scan_keeps_timer_and_resolves() {
    let camera = TrackedCamera::new();
    let mut session = RecognitionSession::new(Arc::new(camera.clone()), Box::new(RandomDetector::seeded(5)));
    let settings = SettingsStore::default();

    let ticket = session.start().unwrap();
    let timer = ScanTimer::spawn(Duration::from_millis(20), ticket);
    session.reset();
    assert_eq!(session.status(), RecognitionStatus::Idle);

    let fired = poll_until(&timer, Duration::from_secs(2)).unwrap();
    assert!(session.complete_scan(fired, settings.current(), &[]));
    assert!(session.status().is_resolved());
    assert!(session.is_active());
    assert_eq!(camera.live(), 1);
}

#[test]
fn each_view_holds_at_most_one_handle() {
    let camera = TrackedCamera::new();
    let source: Arc<dyn CameraSource> = Arc::new(camera.clone());
    let mut session = RecognitionSession::new(source.clone(), Box::new(RandomDetector::seeded(1)));
    let mut wizard = RegistrationWizard::new(source, Box::new(JpegStillEncoder::default()));

    session.start();
    session.start();
    assert_eq!(camera.live(), 1);

    wizard.open();
    wizard.set_name("Grace");
    wizard.advance();
    wizard.advance();
    assert_eq!(camera.live(), 2);

    wizard.close();
    assert_eq!(camera.live(), 1);

    drop(session);
    assert_eq!(camera.live(), 0);
}

#[test]
fn unavailable_camera_never_strands_session_in_scanning() {
    let mut session = RecognitionSession::new(
        Arc::new(SyntheticCamera::unavailable()),
        Box::new(RandomDetector::seeded(1)),
    );

    assert!(session.start().is_none());
    assert_eq!(session.status(), RecognitionStatus::Failed);
    assert!(!session.is_active());

    session.stop();
    assert_eq!(session.status(), RecognitionStatus::Idle);
}
