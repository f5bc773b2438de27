use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::detection::domain::recognition_detector::{
    DetectionError, DetectionOutcome, RecognitionDetector,
};
use crate::recognition::domain::detected_face::DetectedFace;
use crate::registration::domain::face_registry::RegisteredFace;
use crate::settings::settings_store::Settings;
use crate::shared::constants::MAX_SIMULATED_FACES;
use crate::shared::face_bounds::FaceBounds;
use crate::shared::frame::Frame;

/// Placeholder detector: ignores pixels and decides success by a coin flip
/// weighted by the score threshold.
///
/// A draw `r` in `[0, 1)` above `score_threshold` yields 1–3 faces with
/// confidences in `[score_threshold, 1)`; anything else is a failed scan.
pub struct RandomDetector {
    rng: StdRng,
}

impl RandomDetector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Applies the outcome policy to an already-drawn `draw`.
    ///
    /// Face count and confidences still come from the internal RNG.
    pub fn resolve(
        &mut self,
        draw: f64,
        settings: &Settings,
        known: &[RegisteredFace],
    ) -> DetectionOutcome {
        let threshold = settings.score_threshold;
        if draw <= threshold || threshold >= 1.0 {
            return DetectionOutcome::Failed;
        }

        let count = self.rng.gen_range(1..=MAX_SIMULATED_FACES);
        let faces: Vec<DetectedFace> = (0..count)
            .map(|index| {
                let name = known
                    .get(index)
                    .map(|f| f.name.clone())
                    .unwrap_or_else(|| format!("Person {}", index + 1));
                DetectedFace {
                    id: format!("face-{index}"),
                    name,
                    confidence: self.rng.gen_range(threshold..1.0),
                    bounds: FaceBounds::slot(index),
                }
            })
            .collect();

        let faces = FaceBounds::suppress_overlaps(&faces, |f| f.bounds, settings.nms_threshold);
        DetectionOutcome::Recognized(faces)
    }
}

impl Default for RandomDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionDetector for RandomDetector {
    fn detect(
        &mut self,
        frame: &Frame,
        settings: &Settings,
        known: &[RegisteredFace],
    ) -> Result<DetectionOutcome, DetectionError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(DetectionError::InvalidFrame {
                sequence: frame.sequence(),
                reason: format!("empty {}x{} frame", frame.width(), frame.height()),
            });
        }
        let draw: f64 = self.rng.gen();
        log::debug!(
            "frame {}: draw {draw:.3} against score threshold {:.2}",
            frame.sequence(),
            settings.score_threshold
        );
        Ok(self.resolve(draw, settings, known))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(score: f64) -> Settings {
        Settings {
            score_threshold: score,
            ..Settings::default()
        }
    }

    fn registered(name: &str) -> RegisteredFace {
        RegisteredFace {
            id: format!("reg-{name}"),
            name: name.to_owned(),
            image_data: "data:image/jpeg;base64,".to_owned(),
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn test_high_draw_recognizes_one_to_three_faces(#[case] seed: u64) {
        let mut detector = RandomDetector::seeded(seed);
        let outcome = detector.resolve(0.9, &settings(0.5), &[]);

        let DetectionOutcome::Recognized(faces) = outcome else {
            panic!("expected recognition");
        };
        assert!((1..=3).contains(&faces.len()));
        for face in &faces {
            assert!(face.confidence >= 0.5 && face.confidence < 1.0);
        }
    }

    #[test]
    fn test_low_draw_fails() {
        let mut detector = RandomDetector::seeded(7);
        assert_eq!(
            detector.resolve(0.1, &settings(0.5), &[]),
            DetectionOutcome::Failed
        );
    }

    #[test]
    fn test_draw_equal_to_threshold_fails() {
        let mut detector = RandomDetector::seeded(7);
        assert_eq!(
            detector.resolve(0.5, &settings(0.5), &[]),
            DetectionOutcome::Failed
        );
    }

    #[test]
    fn test_threshold_one_never_recognizes() {
        let mut detector = RandomDetector::seeded(7);
        assert_eq!(
            detector.resolve(0.999, &settings(1.0), &[]),
            DetectionOutcome::Failed
        );
    }

    #[test]
    fn test_names_come_from_registry_by_position() {
        let known = vec![registered("Ada"), registered("Grace"), registered("Linus")];
        for seed in 0..20 {
            let mut detector = RandomDetector::seeded(seed);
            let DetectionOutcome::Recognized(faces) = detector.resolve(0.9, &settings(0.5), &known)
            else {
                panic!("expected recognition");
            };
            for (i, face) in faces.iter().enumerate() {
                assert_eq!(face.name, known[i].name);
                assert_eq!(face.id, format!("face-{i}"));
            }
        }
    }

    #[test]
    fn test_placeholder_names_when_registry_is_short() {
        let known = vec![registered("Ada")];
        for seed in 0..20 {
            let mut detector = RandomDetector::seeded(seed);
            let DetectionOutcome::Recognized(faces) = detector.resolve(0.9, &settings(0.5), &known)
            else {
                panic!("expected recognition");
            };
            assert_eq!(faces[0].name, "Ada");
            for (i, face) in faces.iter().enumerate().skip(1) {
                assert_eq!(face.name, format!("Person {}", i + 1));
            }
        }
    }

    #[test]
    fn test_faces_occupy_distinct_slots() {
        for seed in 0..20 {
            let mut detector = RandomDetector::seeded(seed);
            if let DetectionOutcome::Recognized(faces) = detector.resolve(0.9, &settings(0.2), &[]) {
                for (i, face) in faces.iter().enumerate() {
                    assert_eq!(face.bounds, FaceBounds::slot(i));
                }
            }
        }
    }

    #[test]
    fn test_detect_with_zero_threshold_always_recognizes() {
        let mut detector = RandomDetector::seeded(42);
        let frame = Frame::blank(4, 4, 0);
        for _ in 0..50 {
            let outcome = detector.detect(&frame, &settings(0.0), &[]).unwrap();
            assert!(matches!(outcome, DetectionOutcome::Recognized(_)));
        }
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        let mut detector = RandomDetector::seeded(1);
        let frame = Frame::blank(0, 0, 3);
        let err = detector.detect(&frame, &settings(0.0), &[]).unwrap_err();
        assert!(matches!(err, DetectionError::InvalidFrame { sequence: 3, .. }));
    }

    #[test]
    fn test_seeded_detectors_are_reproducible() {
        let frame = Frame::blank(4, 4, 0);
        let mut a = RandomDetector::seeded(9);
        let mut b = RandomDetector::seeded(9);
        for _ in 0..10 {
            assert_eq!(
                a.detect(&frame, &settings(0.5), &[]).unwrap(),
                b.detect(&frame, &settings(0.5), &[]).unwrap()
            );
        }
    }
}
