use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// The console always renders dark, like a camera monitoring screen.
pub fn resolve_theme() -> Theme {
    Theme::custom("Face Recognition", palette())
}

fn palette() -> Palette {
    Palette {
        background: color!(0x11, 0x18, 0x27),
        text: color!(0xf3, 0xf4, 0xf6),
        primary: color!(0x3b, 0x82, 0xf6),
        success: color!(0x22, 0xc5, 0x5e),
        warning: color!(0xea, 0xb3, 0x08),
        danger: color!(0xef, 0x44, 0x44),
    }
}

/// Card background, one step lighter than the window.
pub fn surface_color(theme: &Theme) -> Color {
    lighten(theme.palette().background, 0.06)
}

/// Inset background for wells and the camera letterbox.
pub fn inset_color(theme: &Theme) -> Color {
    lighten(theme.palette().background, 0.12)
}

/// Secondary text.
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.palette().text
    }
}

fn lighten(c: Color, amount: f32) -> Color {
    Color {
        r: (c.r + amount).min(1.0),
        g: (c.g + amount).min(1.0),
        b: (c.b + amount).min(1.0),
        a: c.a,
    }
}
