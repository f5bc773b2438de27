use iced::border::Border;
use iced::widget::{container, Container};
use iced::{Element, Length, Theme};

use crate::theme::surface_color;

const CORNER_RADIUS: f32 = 12.0;

/// Rounded surface panel used for every section of the console.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(surface_color(theme).into()),
            border: Border {
                radius: CORNER_RADIUS.into(),
                width: 1.0,
                color: iced::Color {
                    a: 0.08,
                    ..theme.palette().text
                },
            },
            ..container::Style::default()
        })
}
