use iced::widget::{button, column, row, text};
use iced::{Alignment, Color, Element, Length, Theme};

use facerec_core::recognition::domain::recognition_status::RecognitionStatus;

use crate::app::{HoverTarget, Message};
use crate::theme::muted_color;
use crate::widgets::card::card;
use crate::widgets::primary_button::{primary_button, Tone};

pub fn view<'a>(
    active: bool,
    status: RecognitionStatus,
    registered: usize,
    hovered: Option<HoverTarget>,
    theme: &Theme,
) -> Element<'a, Message> {
    let muted = muted_color(theme);

    let start = primary_button(
        || text("Start").color(Color::WHITE).center().width(Length::Fill).into(),
        (!active).then_some(Message::Start),
        Tone::Success,
        hovered == Some(HoverTarget::Start),
        |h| Message::ButtonHover(HoverTarget::Start, h),
    );
    let stop = primary_button(
        || text("Stop").color(Color::WHITE).center().width(Length::Fill).into(),
        active.then_some(Message::Stop),
        Tone::Danger,
        hovered == Some(HoverTarget::Stop),
        |h| Message::ButtonHover(HoverTarget::Stop, h),
    );

    let secondary = |label: &'a str, message: Message| {
        button(text(label).center().width(Length::Fill))
            .on_press(message)
            .padding([10, 16])
            .width(Length::Fill)
            .style(button::secondary)
    };

    card(
        column![
            text("Control Panel").size(18),
            row![start, stop].spacing(10),
            row![
                secondary("Reset", Message::Reset),
                secondary("Advanced Settings", Message::OpenSettings),
            ]
            .spacing(10),
            secondary("Register New Face", Message::OpenRegistration),
            row![
                text(format!("Status: {status}")).size(13).color(muted),
                text(format!("{registered} registered")).size(13).color(muted),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ]
        .spacing(12),
    )
    .into()
}
