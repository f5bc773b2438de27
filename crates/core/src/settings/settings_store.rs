use crate::shared::constants::{
    DEFAULT_NMS_THRESHOLD, DEFAULT_SCORE_THRESHOLD, THRESHOLD_STEPS_PER_UNIT,
};

/// Detector thresholds. Both live in `[0, 1]` on a 0.01 grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Minimum confidence score required for a face to count.
    pub score_threshold: f64,
    /// IoU above which overlapping detections are suppressed.
    pub nms_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            nms_threshold: DEFAULT_NMS_THRESHOLD,
        }
    }
}

/// Clamps to `[0, 1]` and snaps to the slider step. NaN becomes 0.
pub fn quantize_threshold(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(0.0, 1.0) * THRESHOLD_STEPS_PER_UNIT).round() / THRESHOLD_STEPS_PER_UNIT
}

/// Saved settings plus the draft edited by the open settings dialog.
///
/// Edits touch only the draft; `save` commits both fields at once and
/// `cancel` throws the draft away.
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: Settings,
    draft: Option<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: Settings {
                score_threshold: quantize_threshold(initial.score_threshold),
                nms_threshold: quantize_threshold(initial.nms_threshold),
            },
            draft: None,
        }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    pub fn draft(&self) -> Option<&Settings> {
        self.draft.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens the dialog seeded from the saved values. Reopening an already
    /// open dialog keeps its edits.
    pub fn open_dialog(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.current);
        }
    }

    pub fn set_score_threshold(&mut self, value: f64) {
        if let Some(draft) = self.draft.as_mut() {
            draft.score_threshold = quantize_threshold(value);
        }
    }

    pub fn set_nms_threshold(&mut self, value: f64) {
        if let Some(draft) = self.draft.as_mut() {
            draft.nms_threshold = quantize_threshold(value);
        }
    }

    /// Commits the draft and closes the dialog. Returns `false` if no dialog
    /// was open.
    pub fn save(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.current = draft;
                log::info!(
                    "settings saved: score threshold {:.2}, NMS threshold {:.2}",
                    draft.score_threshold,
                    draft.nms_threshold
                );
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }
}
