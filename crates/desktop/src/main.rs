mod app;
mod config;
mod theme;
mod views;
mod widgets;

use app::App;
use config::AppConfig;

fn main() -> iced::Result {
    env_logger::init();

    let config = AppConfig::from_env();

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Multi-Face Recognition")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(1180.0, 760.0),
            min_size: Some(iced::Size::new(900.0, 620.0)),
            ..Default::default()
        })
        .run()
}
