use iced::mouse;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use facerec_core::recognition::domain::detected_face::DetectedFace;

const BOX_WIDTH: f32 = 2.0;
const LABEL_HEIGHT: f32 = 22.0;
const LABEL_TEXT_SIZE: f32 = 13.0;
const LABEL_CHAR_WIDTH: f32 = 7.5;
const SCAN_BAR_HEIGHT: f32 = 3.0;

/// Canvas program drawing face boxes with `name (confidence)` tags, plus the
/// sweeping bar while a scan is in progress.
///
/// Box geometry comes from percentage bounds, so the overlay tracks the video
/// at whatever size the view is laid out.
pub struct FaceOverlay<'a> {
    pub faces: &'a [DetectedFace],
    /// Position of the scan bar in `[0, 1]`, `None` when not scanning.
    pub scan_progress: Option<f32>,
}

impl<Message> canvas::Program<Message> for FaceOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let accent = theme.palette().primary;

        for face in self.faces {
            let (x, y, w, h) = face.bounds.to_pixels(bounds.width, bounds.height);

            frame.stroke(
                &Path::rectangle(Point::new(x, y), Size::new(w, h)),
                Stroke::default().with_color(accent).with_width(BOX_WIDTH),
            );

            let label = format!("{} ({})", face.name, face.confidence_label());
            let label_width = label.chars().count() as f32 * LABEL_CHAR_WIDTH + 12.0;
            let label_top = (y - LABEL_HEIGHT - 4.0).max(0.0);
            frame.fill_rectangle(
                Point::new(x, label_top),
                Size::new(label_width, LABEL_HEIGHT),
                accent,
            );
            frame.fill_text(canvas::Text {
                content: label,
                position: Point::new(x + 6.0, label_top + 4.0),
                color: Color::WHITE,
                size: Pixels(LABEL_TEXT_SIZE),
                ..canvas::Text::default()
            });
        }

        if let Some(progress) = self.scan_progress {
            let y = progress.clamp(0.0, 1.0) * (bounds.height - SCAN_BAR_HEIGHT).max(0.0);
            frame.fill_rectangle(
                Point::new(0.0, y),
                Size::new(bounds.width, SCAN_BAR_HEIGHT),
                Color { a: 0.8, ..accent },
            );
        }

        vec![frame.into_geometry()]
    }
}
