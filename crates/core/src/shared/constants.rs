use std::time::Duration;

pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_NMS_THRESHOLD: f64 = 0.3;

/// Slider granularity for both thresholds: 0.01.
pub const THRESHOLD_STEPS_PER_UNIT: f64 = 100.0;

/// Time the detection stub "thinks" before resolving a scan.
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(3000);

/// Preferred capture resolution for the user-facing camera.
pub const IDEAL_CAPTURE_WIDTH: u32 = 1280;
pub const IDEAL_CAPTURE_HEIGHT: u32 = 720;

/// Upper bound on faces the detection stub synthesizes per scan.
pub const MAX_SIMULATED_FACES: usize = 3;

pub const STILL_JPEG_QUALITY: u8 = 85;
