use iced::widget::{button, column, container, image, row, text, text_input, Space};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use facerec_core::registration::domain::registration_wizard::{RegistrationStep, RegistrationWizard};

use crate::app::{HoverTarget, Message};
use crate::theme::{inset_color, muted_color};
use crate::widgets::card::card;
use crate::widgets::primary_button::{primary_button, Tone};

const DIALOG_WIDTH: f32 = 440.0;
const PREVIEW_HEIGHT: f32 = 240.0;

/// Dialog body for the registration wizard.
///
/// `preview` is the live frame on the capture step, or the captured still
/// once one has been taken.
pub fn view<'a>(
    wizard: &'a RegistrationWizard,
    preview: Option<&image::Handle>,
    error: Option<&'a str>,
    hovered: Option<HoverTarget>,
    theme: &Theme,
) -> Element<'a, Message> {
    let muted = muted_color(theme);

    let header = row![
        text("Register New Face").size(18),
        Space::new().width(Length::Fill),
        button(text("\u{2715}").size(14))
            .on_press(Message::RegistrationClose)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let body = match wizard.step() {
        RegistrationStep::Info => info_step(wizard, hovered, muted),
        RegistrationStep::Capture => capture_step(wizard, preview, hovered, muted),
    };

    let mut content = column![header, body].spacing(14);
    if let Some(err) = error {
        content = content.push(text(err).size(12).color(theme.palette().danger));
    }

    card(content).width(DIALOG_WIDTH).into()
}

fn info_step<'a>(
    wizard: &'a RegistrationWizard,
    hovered: Option<HoverTarget>,
    muted: Color,
) -> Element<'a, Message> {
    let next_enabled = wizard.can_advance();
    let mut input = text_input("Enter person's name", wizard.name())
        .on_input(Message::RegistrationNameChanged)
        .padding(10);
    if next_enabled {
        input = input.on_submit(Message::RegistrationNext);
    }

    column![
        text("Full Name").size(13).color(muted),
        input,
        primary_button(
            || text("Next").color(Color::WHITE).center().width(Length::Fill).into(),
            next_enabled.then_some(Message::RegistrationNext),
            Tone::Primary,
            hovered == Some(HoverTarget::Next),
            |h| Message::ButtonHover(HoverTarget::Next, h),
        ),
    ]
    .spacing(10)
    .into()
}

fn capture_step<'a>(
    wizard: &'a RegistrationWizard,
    preview: Option<&image::Handle>,
    hovered: Option<HoverTarget>,
    muted: Color,
) -> Element<'a, Message> {
    let frame: Element<'a, Message> = match preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let message = match wizard.camera_error() {
                Some(err) => format!("Camera unavailable: {err}"),
                None => "Waiting for camera...".to_owned(),
            };
            container(text(message).size(13).color(muted))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        }
    };

    let preview_box = container(frame)
        .width(Length::Fill)
        .height(PREVIEW_HEIGHT)
        .style(|theme: &Theme| container::Style {
            background: Some(inset_color(theme).into()),
            ..container::Style::default()
        });

    let actions: Element<'a, Message> = if wizard.captured().is_some() {
        row![
            button(text("Retake").center().width(Length::Fill))
                .on_press(Message::RegistrationRetake)
                .padding([10, 16])
                .width(Length::Fill)
                .style(button::secondary),
            primary_button(
                || text("Register").color(Color::WHITE).center().width(Length::Fill).into(),
                wizard.can_register().then_some(Message::RegistrationSubmit),
                Tone::Success,
                hovered == Some(HoverTarget::Register),
                |h| Message::ButtonHover(HoverTarget::Register, h),
            ),
        ]
        .spacing(10)
        .into()
    } else {
        primary_button(
            || text("Capture").color(Color::WHITE).center().width(Length::Fill).into(),
            wizard.is_camera_live().then_some(Message::RegistrationCapture),
            Tone::Primary,
            hovered == Some(HoverTarget::Capture),
            |h| Message::ButtonHover(HoverTarget::Capture, h),
        )
    };

    column![
        text(format!("Look at the camera, {}", wizard.name().trim())).size(13).color(muted),
        preview_box,
        actions,
    ]
    .spacing(10)
    .into()
}
