use iced::border::Border;
use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use facerec_core::recognition::domain::recognition_status::RecognitionStatus;

use crate::app::Message;
use crate::theme::{inset_color, muted_color};
use crate::widgets::card::card;

const STEP_HEIGHT: f32 = 6.0;

/// Headline for the current status plus a four-segment step strip that lights
/// the segment matching it.
pub fn view<'a>(status: RecognitionStatus, face_count: usize, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let (title, detail) = headline(status, face_count);
    let accent = step_color(status, theme);

    let steps = row(RecognitionStatus::ALL.iter().map(|&step| {
        let lit = step == status;
        container(Space::new().height(STEP_HEIGHT))
            .width(Length::Fill)
            .style(move |theme: &Theme| container::Style {
                background: Some(if lit { accent } else { inset_color(theme) }.into()),
                border: Border {
                    radius: (STEP_HEIGHT / 2.0).into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }))
    .spacing(4);

    let labels = row(RecognitionStatus::ALL.iter().map(|&step| {
        text(step.to_string())
            .size(11)
            .color(if step == status { accent } else { muted })
            .width(Length::Fill)
            .into()
    }))
    .spacing(4);

    card(
        column![
            text("System Status").size(13).color(muted),
            text(title).size(18).color(if status.is_resolved() {
                accent
            } else {
                theme.palette().text
            }),
            text(detail).size(13).color(muted),
            Space::new().height(6),
            steps,
            labels,
        ]
        .spacing(4),
    )
    .into()
}

fn headline(status: RecognitionStatus, face_count: usize) -> (&'static str, String) {
    match status {
        RecognitionStatus::Idle => ("System Idle", "Ready to begin facial recognition".to_owned()),
        RecognitionStatus::Scanning => ("Processing", "Analyzing facial features...".to_owned()),
        RecognitionStatus::Recognized => {
            let noun = if face_count == 1 { "person" } else { "people" };
            ("Recognition Successful", format!("{face_count} {noun} identified"))
        }
        RecognitionStatus::Failed => ("Recognition Failed", "Unable to match facial patterns".to_owned()),
    }
}

fn step_color(status: RecognitionStatus, theme: &Theme) -> Color {
    let palette = theme.palette();
    match status {
        RecognitionStatus::Idle => muted_color(theme),
        RecognitionStatus::Scanning => palette.primary,
        RecognitionStatus::Recognized => palette.success,
        RecognitionStatus::Failed => palette.danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_pluralises_people() {
        assert_eq!(headline(RecognitionStatus::Recognized, 1).1, "1 person identified");
        assert_eq!(headline(RecognitionStatus::Recognized, 3).1, "3 people identified");
    }

    #[test]
    fn test_failed_headline() {
        assert_eq!(headline(RecognitionStatus::Failed, 0).0, "Recognition Failed");
    }
}
