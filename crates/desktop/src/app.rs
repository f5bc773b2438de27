use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::widget::{column, container, image, row, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facerec_core::camera::domain::camera_source::CameraSource;
use facerec_core::camera::infrastructure::synthetic_camera::SyntheticCamera;
use facerec_core::detection::infrastructure::random_detector::RandomDetector;
use facerec_core::recognition::domain::recognition_session::RecognitionSession;
use facerec_core::recognition::domain::recognition_status::RecognitionStatus;
use facerec_core::recognition::infrastructure::scan_timer::ScanTimer;
use facerec_core::registration::domain::face_registry::FaceRegistry;
use facerec_core::registration::domain::registration_wizard::RegistrationWizard;
use facerec_core::registration::infrastructure::jpeg_still_encoder::JpegStillEncoder;
use facerec_core::settings::settings_store::SettingsStore;
use facerec_core::shared::frame::Frame;

use crate::config::{AppConfig, CameraMode};
use crate::theme::{self, muted_color};
use crate::views;
use crate::widgets::modal::modal;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const SCAN_SWEEP: Duration = Duration::from_millis(1500);

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// Buttons that animate on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Start,
    Stop,
    Next,
    Capture,
    Register,
    SaveSettings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Start,
    Stop,
    Reset,
    OpenRegistration,
    OpenSettings,
    Tick,
    ButtonHover(HoverTarget, bool),
    RegistrationNameChanged(String),
    RegistrationNext,
    RegistrationCapture,
    RegistrationRetake,
    RegistrationSubmit,
    RegistrationClose,
    ScoreThresholdChanged(f64),
    NmsThresholdChanged(f64),
    SettingsSave,
    SettingsCancel,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    config: AppConfig,
    session: RecognitionSession,
    registry: FaceRegistry,
    settings: SettingsStore,
    wizard: RegistrationWizard,
    scan_timer: Option<ScanTimer>,
    scan_started: Option<Instant>,
    live_frame: Option<image::Handle>,
    wizard_frame: Option<image::Handle>,
    still_preview: Option<image::Handle>,
    registration_error: Option<String>,
    hovered: Option<HoverTarget>,
}

impl App {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let camera: Arc<dyn CameraSource> = match config.camera {
            CameraMode::Synthetic => Arc::new(SyntheticCamera::default()),
            CameraMode::Unavailable => Arc::new(SyntheticCamera::unavailable()),
        };
        let detector = match config.seed {
            Some(seed) => RandomDetector::seeded(seed),
            None => RandomDetector::new(),
        };
        log::info!(
            "starting console: camera {:?}, scan delay {} ms",
            config.camera,
            config.scan_delay.as_millis()
        );

        (
            Self {
                session: RecognitionSession::new(camera.clone(), Box::new(detector)),
                registry: FaceRegistry::new(),
                settings: SettingsStore::default(),
                wizard: RegistrationWizard::new(camera, Box::new(JpegStillEncoder::default())),
                scan_timer: None,
                scan_started: None,
                live_frame: None,
                wizard_frame: None,
                still_preview: None,
                registration_error: None,
                hovered: None,
                config,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Start => {
                if let Some(ticket) = self.session.start() {
                    self.scan_timer = Some(ScanTimer::spawn(self.config.scan_delay, ticket));
                    self.scan_started = Some(Instant::now());
                }
                self.refresh_frames();
            }
            Message::Stop => {
                self.cancel_scan();
                self.session.stop();
                self.live_frame = None;
            }
            Message::Reset => {
                self.session.reset();
            }
            Message::Tick => {
                let fired = self.scan_timer.as_ref().and_then(ScanTimer::poll);
                if let Some(ticket) = fired {
                    self.cancel_scan();
                    self.session
                        .complete_scan(ticket, self.settings.current(), self.registry.faces());
                }
                self.refresh_frames();
            }
            Message::ButtonHover(target, true) => {
                self.hovered = Some(target);
            }
            Message::ButtonHover(target, false) => {
                if self.hovered == Some(target) {
                    self.hovered = None;
                }
            }
            Message::OpenRegistration => {
                self.wizard.open();
            }
            Message::RegistrationNameChanged(name) => {
                self.wizard.set_name(name);
            }
            Message::RegistrationNext => {
                if self.wizard.advance() {
                    self.refresh_frames();
                }
            }
            Message::RegistrationCapture => match self.wizard.capture() {
                Ok(()) => {
                    self.registration_error = None;
                    self.still_preview = self.wizard.captured().map(|still| frame_handle(&still.frame));
                }
                Err(err) => {
                    log::warn!("registration capture failed: {err}");
                    self.registration_error = Some(err.to_string());
                }
            },
            Message::RegistrationRetake => {
                self.wizard.retake();
                self.still_preview = None;
                self.registration_error = None;
            }
            Message::RegistrationSubmit => {
                if self.wizard.register(&mut self.registry).is_some() {
                    self.clear_wizard_view();
                }
            }
            Message::RegistrationClose => {
                self.wizard.close();
                self.clear_wizard_view();
            }
            Message::OpenSettings => {
                self.settings.open_dialog();
            }
            Message::ScoreThresholdChanged(value) => {
                self.settings.set_score_threshold(value);
            }
            Message::NmsThresholdChanged(value) => {
                self.settings.set_nms_threshold(value);
            }
            Message::SettingsSave => {
                self.settings.save();
            }
            Message::SettingsCancel => {
                self.settings.cancel();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let theme = self.theme();
        let status = self.session.status();
        let faces = self.session.detected_faces();

        let header = column![
            text("Multi-Face Recognition").size(24),
            text("Live camera identification console")
                .size(13)
                .color(muted_color(&theme)),
        ]
        .spacing(2);

        let left = column![
            views::camera_view::view(
                self.live_frame.as_ref(),
                faces,
                status,
                self.session.is_active(),
                self.session.camera_resolution(),
                self.scan_progress(),
                self.session.camera_error(),
                &theme,
            ),
            views::recognition_status::view(status, faces.len(), &theme),
        ]
        .spacing(16)
        .width(Length::FillPortion(2));

        let right = column![
            views::control_panel::view(
                self.session.is_active(),
                status,
                self.registry.len(),
                self.hovered,
                &theme,
            ),
            views::results_panel::view(status, faces, &theme),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        let base = container(column![header, row![left, right].spacing(16)].spacing(16))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.wizard.is_open() {
            let preview = self.still_preview.as_ref().or(self.wizard_frame.as_ref());
            return modal(
                base,
                views::registration_modal::view(
                    &self.wizard,
                    preview,
                    self.registration_error.as_deref(),
                    self.hovered,
                    &theme,
                ),
            );
        }

        if let Some(draft) = self.settings.draft() {
            return modal(base, views::settings_modal::view(draft, self.hovered, &theme));
        }

        base.into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme()
    }

    /// Ticks only while there is a feed to refresh or a scan to wait on.
    pub fn subscription(&self) -> Subscription<Message> {
        let busy = self.session.is_camera_live()
            || self.wizard.is_camera_live()
            || self.scan_timer.is_some();
        if busy {
            iced::time::every(FRAME_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn cancel_scan(&mut self) {
        // Dropping the timer cancels its worker.
        self.scan_timer = None;
        self.scan_started = None;
    }

    fn scan_progress(&self) -> Option<f32> {
        if self.session.status() != RecognitionStatus::Scanning {
            return None;
        }
        let elapsed = self.scan_started?.elapsed();
        let sweep = SCAN_SWEEP.as_secs_f32();
        Some((elapsed.as_secs_f32() % sweep) / sweep)
    }

    fn refresh_frames(&mut self) {
        self.live_frame = if self.session.is_camera_live() {
            match self.session.read_frame() {
                Ok(frame) => Some(frame_handle(&frame)),
                Err(err) => {
                    log::warn!("recognition feed read failed: {err}");
                    None
                }
            }
        } else {
            None
        };

        self.wizard_frame = if self.wizard.is_camera_live() && self.wizard.captured().is_none() {
            match self.wizard.live_frame() {
                Ok(frame) => Some(frame_handle(&frame)),
                Err(err) => {
                    log::warn!("registration feed read failed: {err}");
                    None
                }
            }
        } else {
            None
        };
    }

    fn clear_wizard_view(&mut self) {
        self.wizard_frame = None;
        self.still_preview = None;
        self.registration_error = None;
    }
}

fn frame_handle(frame: &Frame) -> image::Handle {
    image::Handle::from_rgba(frame.width(), frame.height(), frame.to_rgba())
}
