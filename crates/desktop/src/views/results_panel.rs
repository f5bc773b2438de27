use iced::border::Border;
use iced::widget::{column, container, progress_bar, row, scrollable, text, Column, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use facerec_core::recognition::domain::detected_face::DetectedFace;
use facerec_core::recognition::domain::recognition_status::RecognitionStatus;

use crate::app::Message;
use crate::theme::{inset_color, muted_color};
use crate::widgets::card::card;

const HIGH_CONFIDENCE: f64 = 0.9;
const MEDIUM_CONFIDENCE: f64 = 0.7;

/// Per-face confidence breakdown once a scan has been resolved.
pub fn view<'a>(status: RecognitionStatus, faces: &'a [DetectedFace], theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);

    let body: Element<'a, Message> = match status {
        RecognitionStatus::Scanning => placeholder("Analyzing facial features...", None, muted),
        status if status.carries_faces() && !faces.is_empty() => face_list(faces, muted),
        RecognitionStatus::Failed => placeholder(
            "Recognition Failed",
            Some("Unable to verify identities. Try adjusting lighting or camera position."),
            muted,
        ),
        _ => placeholder("No recognition data", Some("Start the recognition process"), muted),
    };

    card(column![text("Recognition Results").size(18), body].spacing(12)).into()
}

fn face_list<'a>(faces: &'a [DetectedFace], muted: Color) -> Element<'a, Message> {
    let mut list = Column::new().spacing(10);

    if let Some(average) = DetectedFace::average_confidence(faces) {
        list = list.push(
            text(format!("Average confidence: {:.1}%", average * 100.0))
                .size(13)
                .color(muted),
        );
    }

    for face in faces {
        list = list.push(face_row(face, muted));
    }

    scrollable(list).height(Length::Fill).into()
}

fn face_row<'a>(face: &'a DetectedFace, muted: Color) -> Element<'a, Message> {
    let confidence = face.confidence;
    let bar = progress_bar(0.0..=1.0, confidence as f32).style(move |theme: &Theme| {
        progress_bar::Style {
            background: inset_color(theme).into(),
            bar: confidence_color(confidence, theme).into(),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
        }
    });

    container(
        column![
            row![
                text(face.name.as_str()).size(15),
                Space::new().width(Length::Fill),
                text(face.confidence_label()).size(14),
            ]
            .align_y(Alignment::Center),
            text(format!("Face ID: {}", face.id)).size(11).color(muted),
            bar,
            text(format!(
                "Position: {:.1}%, {:.1}%  Size: {:.1}% x {:.1}%",
                face.bounds.x, face.bounds.y, face.bounds.width, face.bounds.height
            ))
            .size(11)
            .color(muted),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        background: Some(inset_color(theme).into()),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn placeholder<'a>(title: &'a str, detail: Option<&'a str>, muted: Color) -> Element<'a, Message> {
    let mut content = column![text(title).size(15).color(muted)]
        .spacing(4)
        .align_x(Alignment::Center);
    if let Some(detail) = detail {
        content = content.push(text(detail).size(12).color(muted));
    }
    container(content)
        .width(Length::Fill)
        .height(160)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn confidence_color(confidence: f64, theme: &Theme) -> Color {
    let palette = theme.palette();
    if confidence > HIGH_CONFIDENCE {
        palette.success
    } else if confidence > MEDIUM_CONFIDENCE {
        palette.primary
    } else {
        palette.warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve_theme;
    use rstest::rstest;

    #[rstest]
    #[case::high(0.95, "success")]
    #[case::medium(0.8, "primary")]
    #[case::boundary(0.9, "primary")]
    #[case::low(0.55, "warning")]
    fn test_confidence_color_bands(#[case] confidence: f64, #[case] expected: &str) {
        let theme = resolve_theme();
        let palette = theme.palette();
        let want = match expected {
            "success" => palette.success,
            "primary" => palette.primary,
            _ => palette.warning,
        };
        assert_eq!(confidence_color(confidence, &theme), want);
    }
}
