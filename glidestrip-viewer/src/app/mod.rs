use iced::Theme;

use crate::infra::constants::window;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the viewer application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Glidestrip", update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(window::WIDTH, window::HEIGHT),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || State::new(&config))
}

fn app_theme(_: &State) -> Theme {
    Theme::TokyoNight
}
