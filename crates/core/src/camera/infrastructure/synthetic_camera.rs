use crate::camera::domain::camera_source::{
    CameraError, CameraSource, CameraStream, CaptureConstraints,
};
use crate::shared::constants::MAX_SIMULATED_FACES;
use crate::shared::face_bounds::FaceBounds;
use crate::shared::frame::Frame;

/// Simulated capture device producing an animated test pattern.
///
/// Stands in for a physical webcam: the pattern drifts every frame and shows
/// pale "head" blobs where the detection stub places its boxes, so overlays
/// line up with something visible.
#[derive(Debug, Clone)]
pub struct SyntheticCamera {
    available: bool,
    max_width: u32,
    max_height: u32,
}

impl SyntheticCamera {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            available: true,
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }

    /// A device that refuses every acquisition, as when permission is denied
    /// or no camera is attached.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            max_width: 1,
            max_height: 1,
        }
    }

    /// Picks the largest size not exceeding either the ideal or the device
    /// maximum, keeping the ideal aspect ratio.
    fn negotiate(&self, constraints: &CaptureConstraints) -> (u32, u32) {
        let ideal_w = constraints.ideal_width.max(1);
        let ideal_h = constraints.ideal_height.max(1);
        let scale = (self.max_width as f64 / ideal_w as f64)
            .min(self.max_height as f64 / ideal_h as f64)
            .min(1.0);
        let w = ((ideal_w as f64 * scale).round() as u32).max(1);
        let h = ((ideal_h as f64 * scale).round() as u32).max(1);
        (w, h)
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new(640, 360)
    }
}

impl CameraSource for SyntheticCamera {
    fn acquire(&self, constraints: &CaptureConstraints) -> Result<Box<dyn CameraStream>, CameraError> {
        if !self.available {
            return Err(CameraError::Unavailable("synthetic camera is disabled".into()));
        }
        let (width, height) = self.negotiate(constraints);
        Ok(Box::new(SyntheticStream {
            width,
            height,
            sequence: 0,
        }))
    }
}

struct SyntheticStream {
    width: u32,
    height: u32,
    sequence: u64,
}

impl SyntheticStream {
    /// Drifting gradient, row-major RGB.
    fn background(&self) -> Vec<u8> {
        let w = self.width as f64;
        let h = self.height as f64;
        let drift = (self.sequence % 256) as f64;
        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * Frame::CHANNELS);
        for y in 0..self.height {
            for x in 0..self.width {
                let fx = x as f64;
                let fy = y as f64;
                data.push((40.0 + 60.0 * fx / w) as u8);
                data.push((40.0 + 60.0 * fy / h) as u8);
                data.push(((80.0 + drift + fx / 8.0) % 256.0) as u8);
            }
        }
        data
    }

    /// Paints a pale ellipse inside each detection slot.
    fn paint_heads(&self, frame: &mut Frame) {
        let heads: Vec<(f64, f64, f64, f64)> = (0..MAX_SIMULATED_FACES)
            .map(|i| {
                let b = FaceBounds::slot(i);
                let (x, y, bw, bh) = b.to_pixels(self.width as f32, self.height as f32);
                let (x, y, bw, bh) = (x as f64, y as f64, bw as f64, bh as f64);
                (x + bw / 2.0, y + bh / 2.0, bw / 2.0, bh / 2.0)
            })
            .collect();

        let mut pixels = frame.as_ndarray_mut();
        for (y, mut row) in pixels.outer_iter_mut().enumerate() {
            for (x, mut px) in row.outer_iter_mut().enumerate() {
                let in_head = heads.iter().any(|&(cx, cy, rx, ry)| {
                    let dx = (x as f64 - cx) / rx;
                    let dy = (y as f64 - cy) / ry;
                    dx * dx + dy * dy <= 1.0
                });
                if in_head {
                    px[0] = 214;
                    px[1] = 180;
                    px[2] = 160;
                }
            }
        }
    }
}

impl CameraStream for SyntheticStream {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read_frame(&mut self) -> Result<Frame, CameraError> {
        let mut frame = Frame::new(self.background(), self.width, self.height, self.sequence)
            .map_err(|e| CameraError::Read(e.to_string()))?;
        self.paint_heads(&mut frame);
        self.sequence += 1;
        Ok(frame)
    }
}

impl Drop for SyntheticStream {
    fn drop(&mut self) {
        log::debug!(
            "synthetic stream {}x{} stopped after {} frames",
            self.width,
            self.height,
            self.sequence
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits(1920, 1080, (1280, 720))]
    #[case::downscaled(640, 360, (640, 360))]
    #[case::narrow_device(320, 720, (320, 180))]
    fn test_negotiated_resolution(
        #[case] max_w: u32,
        #[case] max_h: u32,
        #[case] expected: (u32, u32),
    ) {
        let camera = SyntheticCamera::new(max_w, max_h);
        let stream = camera.acquire(&CaptureConstraints::default()).unwrap();
        assert_eq!(stream.resolution(), expected);
    }

    #[test]
    fn test_frames_match_resolution_and_advance() {
        let camera = SyntheticCamera::new(64, 36);
        let mut stream = camera.acquire(&CaptureConstraints::default()).unwrap();

        let a = stream.read_frame().unwrap();
        let b = stream.read_frame().unwrap();

        assert_eq!((a.width(), a.height()), (64, 36));
        assert_eq!(a.data().len(), 64 * 36 * 3);
        assert_eq!(a.sequence(), 0);
        assert_eq!(b.sequence(), 1);
        assert_ne!(a.data(), b.data());
    }

    #[test]
    fn test_head_blob_painted_at_slot_centre() {
        let camera = SyntheticCamera::new(100, 100);
        let mut stream = camera
            .acquire(&CaptureConstraints {
                ideal_width: 100,
                ideal_height: 100,
                ..CaptureConstraints::default()
            })
            .unwrap();
        let frame = stream.read_frame().unwrap();

        // Slot 0 spans x 20..40, y 20..45; its centre is (30, 32).
        let px = frame.as_ndarray();
        assert_eq!(px[[32, 30, 0]], 214);
        assert_ne!(px[[5, 5, 0]], 214);
    }

    #[test]
    fn test_unavailable_camera_refuses() {
        let camera = SyntheticCamera::unavailable();
        let err = camera.acquire(&CaptureConstraints::default()).err().unwrap();
        assert!(matches!(err, CameraError::Unavailable(_)));
    }
}
