use crate::shared::face_bounds::FaceBounds;

/// One face reported by a recognition pass.
///
/// `id` is unique within the batch it came from; `confidence` is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedFace {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub bounds: FaceBounds,
}

impl DetectedFace {
    /// Confidence as a percentage with one decimal, e.g. `87.3%`.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Mean confidence of a batch, or `None` when empty.
    pub fn average_confidence(faces: &[DetectedFace]) -> Option<f64> {
        if faces.is_empty() {
            return None;
        }
        Some(faces.iter().map(|f| f.confidence).sum::<f64>() / faces.len() as f64)
    }
}
