use iced::border::Border;
use iced::widget::{canvas, column, container, image, row, stack, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use facerec_core::camera::domain::camera_source::CameraError;
use facerec_core::recognition::domain::detected_face::DetectedFace;
use facerec_core::recognition::domain::recognition_status::RecognitionStatus;

use crate::app::Message;
use crate::theme::{inset_color, muted_color};
use crate::widgets::face_overlay::FaceOverlay;

const VIEWPORT_HEIGHT: f32 = 360.0;
const CORNER_RADIUS: f32 = 12.0;

/// Live feed with detection boxes layered on top, and a status strip below.
pub fn view<'a>(
    frame: Option<&image::Handle>,
    faces: &'a [DetectedFace],
    status: RecognitionStatus,
    active: bool,
    resolution: Option<(u32, u32)>,
    scan_progress: Option<f32>,
    camera_error: Option<&CameraError>,
    theme: &Theme,
) -> Element<'a, Message> {
    let muted = muted_color(theme);

    let feed: Element<'a, Message> = match frame {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => placeholder(camera_error, muted),
    };

    let overlay = canvas(FaceOverlay {
        faces,
        scan_progress,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let viewport = container(stack![feed, overlay])
        .width(Length::Fill)
        .height(VIEWPORT_HEIGHT)
        .clip(true)
        .style(|theme: &Theme| container::Style {
            background: Some(inset_color(theme).into()),
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let palette = theme.palette();
    let dot = if active { palette.success } else { palette.danger };

    let status_bar = row![
        text("\u{25CF}").size(12).color(dot),
        text(camera_label(active, resolution)).size(13),
        Space::new().width(Length::Fill),
        text(status_text(status, faces.len())).size(13).color(muted),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    column![viewport, status_bar].spacing(10).into()
}

fn placeholder<'a>(camera_error: Option<&CameraError>, muted: Color) -> Element<'a, Message> {
    let detail = match camera_error {
        Some(err) => format!("Camera unavailable: {err}"),
        None => "Press Start to turn on the camera".to_owned(),
    };
    container(
        column![
            text("Camera inactive").size(16),
            text(detail).size(13).color(muted),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn camera_label(active: bool, resolution: Option<(u32, u32)>) -> String {
    match (active, resolution) {
        (true, Some((w, h))) => format!("Camera active ({w}x{h})"),
        (true, None) => "Camera active".to_owned(),
        (false, _) => "Camera inactive".to_owned(),
    }
}

fn status_text(status: RecognitionStatus, face_count: usize) -> String {
    match status {
        RecognitionStatus::Idle => "Ready".to_owned(),
        RecognitionStatus::Scanning => "Scanning...".to_owned(),
        RecognitionStatus::Recognized => format!("{face_count} face(s) detected"),
        RecognitionStatus::Failed => "Detection failed".to_owned(),
    }
}
