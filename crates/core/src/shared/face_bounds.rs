/// Face rectangle expressed as percentages of the frame (0–100 on each axis).
///
/// Percentages keep overlays independent of the capture resolution and of the
/// size the view is rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBounds {
    const SLOT_ORIGIN_X: f64 = 20.0;
    const SLOT_STRIDE_X: f64 = 25.0;
    const SLOT_Y: f64 = 20.0;
    const SLOT_WIDTH: f64 = 20.0;
    const SLOT_HEIGHT: f64 = 25.0;

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Deterministic horizontal slot `index` used by simulated detections.
    ///
    /// Slots are 20% wide with a 25% stride, so neighbours never overlap.
    pub fn slot(index: usize) -> Self {
        Self {
            x: Self::SLOT_ORIGIN_X + index as f64 * Self::SLOT_STRIDE_X,
            y: Self::SLOT_Y,
            width: Self::SLOT_WIDTH,
            height: Self::SLOT_HEIGHT,
        }
    }

    /// Maps to a pixel rectangle `(x, y, width, height)` inside a surface of
    /// the given size.
    pub fn to_pixels(&self, surface_width: f32, surface_height: f32) -> (f32, f32, f32, f32) {
        let sx = surface_width / 100.0;
        let sy = surface_height / 100.0;
        (
            self.x as f32 * sx,
            self.y as f32 * sy,
            self.width as f32 * sx,
            self.height as f32 * sy,
        )
    }

    pub fn iou(&self, other: &FaceBounds) -> f64 {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = (self.x + self.width).min(other.x + other.width);
        let iy2 = (self.y + self.height).min(other.y + other.height);

        let inter = (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0);
        if inter == 0.0 {
            return 0.0;
        }

        let area_a = self.width * self.height;
        let area_b = other.width * other.height;
        inter / (area_a + area_b - inter)
    }

    /// Greedy suppression: keeps an item only if its IoU with every
    /// previously-kept item is at or below `iou_threshold`. Order is preserved.
    pub fn suppress_overlaps<T: Clone>(
        items: &[T],
        bounds_of: impl Fn(&T) -> FaceBounds,
        iou_threshold: f64,
    ) -> Vec<T> {
        if items.len() <= 1 {
            return items.to_vec();
        }
        let mut kept: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            let b = bounds_of(item);
            let dominated = kept.iter().any(|k| b.iou(&bounds_of(k)) > iou_threshold);
            if !dominated {
                kept.push(item.clone());
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> FaceBounds {
        FaceBounds::new(x, y, w, h)
    }

    // ── Slots ────────────────────────────────────────────────────────

    #[rstest]
    #[case(0, 20.0)]
    #[case(1, 45.0)]
    #[case(2, 70.0)]
    fn test_slot_x_positions(#[case] index: usize, #[case] expected_x: f64) {
        let slot = FaceBounds::slot(index);
        assert_relative_eq!(slot.x, expected_x);
        assert_relative_eq!(slot.y, 20.0);
        assert_relative_eq!(slot.width, 20.0);
        assert_relative_eq!(slot.height, 25.0);
    }

    #[test]
    fn test_first_three_slots_fit_and_never_overlap() {
        let slots: Vec<_> = (0..3).map(FaceBounds::slot).collect();
        for (i, a) in slots.iter().enumerate() {
            assert!(a.x + a.width <= 100.0 && a.y + a.height <= 100.0);
            for b in &slots[i + 1..] {
                assert_relative_eq!(a.iou(b), 0.0);
            }
        }
    }

    // ── IoU ──────────────────────────────────────────────────────────

    #[test]
    fn test_iou_identical() {
        let a = bounds(10.0, 10.0, 20.0, 20.0);
        assert_relative_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn test_iou_partial_overlap() {
        // intersection 10x20 = 200, union 400 + 400 - 200 = 600
        let a = bounds(0.0, 0.0, 20.0, 20.0);
        let b = bounds(10.0, 0.0, 20.0, 20.0);
        assert_relative_eq!(a.iou(&b), 200.0 / 600.0);
    }

    #[test]
    fn test_iou_touching_edges_is_zero() {
        let a = bounds(0.0, 0.0, 20.0, 20.0);
        let b = bounds(20.0, 0.0, 20.0, 20.0);
        assert_relative_eq!(a.iou(&b), 0.0);
    }

    // ── Suppression ──────────────────────────────────────────────────

    #[test]
    fn test_suppress_drops_heavily_overlapping() {
        let items = vec![bounds(0.0, 0.0, 20.0, 20.0), bounds(2.0, 2.0, 20.0, 20.0)];
        let kept = FaceBounds::suppress_overlaps(&items, |b| *b, 0.3);
        assert_eq!(kept, vec![items[0]]);
    }

    #[test]
    fn test_suppress_keeps_disjoint() {
        let items = vec![FaceBounds::slot(0), FaceBounds::slot(1), FaceBounds::slot(2)];
        let kept = FaceBounds::suppress_overlaps(&items, |b| *b, 0.0);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_suppress_threshold_one_keeps_everything() {
        let a = bounds(0.0, 0.0, 20.0, 20.0);
        let kept = FaceBounds::suppress_overlaps(&[a, a], |b| *b, 1.0);
        assert_eq!(kept.len(), 2);
    }

    // ── Pixel mapping ────────────────────────────────────────────────

    #[test]
    fn test_to_pixels_scales_percentages() {
        let (x, y, w, h) = bounds(50.0, 25.0, 10.0, 20.0).to_pixels(200.0, 100.0);
        assert_relative_eq!(x, 100.0);
        assert_relative_eq!(y, 25.0);
        assert_relative_eq!(w, 20.0);
        assert_relative_eq!(h, 20.0);
    }
}
