use std::time::Duration;

use facerec_core::shared::constants::DEFAULT_SCAN_DELAY;

const SCAN_DELAY_VAR: &str = "FACEREC_SCAN_DELAY_MS";
const CAMERA_VAR: &str = "FACEREC_CAMERA";
const SEED_VAR: &str = "FACEREC_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Synthetic,
    Unavailable,
}

/// Start-up configuration, read once from the environment. Nothing is
/// persisted; recognition thresholds live in the in-memory settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub scan_delay: Duration,
    pub camera: CameraMode,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_delay: DEFAULT_SCAN_DELAY,
            camera: CameraMode::Synthetic,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let scan_delay = match lookup(SCAN_DELAY_VAR) {
            None => defaults.scan_delay,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("ignoring {SCAN_DELAY_VAR}={raw:?}: expected milliseconds");
                    defaults.scan_delay
                }
            },
        };

        let camera = match lookup(CAMERA_VAR).as_deref().map(str::trim) {
            None | Some("synthetic") => CameraMode::Synthetic,
            Some("unavailable") | Some("off") => CameraMode::Unavailable,
            Some(other) => {
                log::warn!("ignoring {CAMERA_VAR}={other:?}: expected synthetic or unavailable");
                defaults.camera
            }
        };

        let seed = lookup(SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring {SEED_VAR}={raw:?}: expected an unsigned integer");
                None
            }
        });

        Self {
            scan_delay,
            camera,
            seed,
        }
    }
}
