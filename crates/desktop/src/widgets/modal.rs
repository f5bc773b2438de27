use iced::widget::{container, mouse_area, opaque, stack};
use iced::{Color, Element, Length, Theme};

const BACKDROP_ALPHA: f32 = 0.55;

/// Lays `dialog` over a dimmed, input-blocking copy of `base`.
///
/// Clicks on the backdrop are swallowed; dialogs close only through their own
/// buttons.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let backdrop = container(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: BACKDROP_ALPHA,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        });

    stack![base.into(), opaque(mouse_area(backdrop))].into()
}
