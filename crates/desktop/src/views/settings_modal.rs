use iced::widget::{button, column, row, slider, text, Space};
use iced::{Color, Element, Length, Theme};

use facerec_core::settings::settings_store::Settings;
use facerec_core::shared::constants::THRESHOLD_STEPS_PER_UNIT;

use crate::app::{HoverTarget, Message};
use crate::theme::muted_color;
use crate::widgets::card::card;
use crate::widgets::primary_button::{primary_button, Tone};

const DIALOG_WIDTH: f32 = 420.0;

/// Dialog body for editing the detector thresholds. Shows the draft, never
/// the saved values.
pub fn view<'a>(draft: &Settings, hovered: Option<HoverTarget>, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let step = 1.0 / THRESHOLD_STEPS_PER_UNIT;

    let threshold = |label: &'a str, value: f64, hint: &'a str, on_change: fn(f64) -> Message| {
        column![
            text(format!("{label}: {value:.2}")).size(14),
            slider(0.0..=1.0, value, on_change).step(step),
            row![
                text("0.00").size(11).color(muted),
                Space::new().width(Length::Fill),
                text("1.00").size(11).color(muted),
            ],
            text(hint).size(12).color(muted),
        ]
        .spacing(6)
    };

    card(
        column![
            text("Advanced Settings").size(18),
            threshold(
                "Score Threshold",
                draft.score_threshold,
                "Minimum confidence score required for face detection",
                Message::ScoreThresholdChanged,
            ),
            threshold(
                "NMS Threshold",
                draft.nms_threshold,
                "Threshold for non-maximum suppression in multiple face detection",
                Message::NmsThresholdChanged,
            ),
            row![
                button(text("Cancel").center().width(Length::Fill))
                    .on_press(Message::SettingsCancel)
                    .padding([10, 16])
                    .width(Length::Fill)
                    .style(button::secondary),
                primary_button(
                    || text("Save Changes").color(Color::WHITE).center().width(Length::Fill).into(),
                    Some(Message::SettingsSave),
                    Tone::Primary,
                    hovered == Some(HoverTarget::SaveSettings),
                    |h| Message::ButtonHover(HoverTarget::SaveSettings, h),
                ),
            ]
            .spacing(10),
        ]
        .spacing(18),
    )
    .width(DIALOG_WIDTH)
    .into()
}
