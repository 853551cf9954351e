use std::time::Instant;

use glidestrip_core::{DragStrip, StripTuning};
use iced::Task;
use iced::widget::{image, scrollable};

use crate::app::{AppConfig, bootstrap};
use crate::crossfade::Crossfade;
use crate::infra::constants::window;
use crate::messages::Message;
use crate::{layout, tuning};

/// Whole-application state. One strip, one hero rotation.
#[derive(Debug)]
pub struct State {
    /// Gallery images, in strip order. Fixed after startup.
    pub cards: Vec<image::Handle>,
    /// The gesture/physics machine driving the strip.
    pub strip: DragStrip,
    /// Identity of the strip's scrollable, for programmatic offset writes.
    pub strip_id: scrollable::Id,
    /// Width of the strip viewport; corrected by scroll viewport reports.
    pub strip_viewport_width: f32,
    /// Last pointer x over the strip, in window coordinates.
    pub cursor_x: f32,
    /// Most recent external (trackpad/wheel) scroll, for settle snapping.
    pub last_wheel: Option<Instant>,
    /// Hero banner rotation.
    pub hero: Crossfade,
}

impl State {
    /// Boot the application from configuration. Missing images or a broken
    /// tuning file degrade with a log line instead of failing startup.
    pub fn new(config: &AppConfig) -> (Self, Task<Message>) {
        let tuning = match &config.tuning_path {
            Some(path) => match tuning::load(path) {
                Ok(tuning) => {
                    log::info!("loaded gesture tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("{err}; falling back to default tuning");
                    StripTuning::default()
                }
            },
            None => StripTuning::default(),
        };

        let cards: Vec<image::Handle> =
            match bootstrap::discover_images(&config.image_dir) {
                Ok(paths) if !paths.is_empty() => {
                    log::info!(
                        "showing {} images from {}",
                        paths.len(),
                        config.image_dir.display()
                    );
                    paths.into_iter().map(image::Handle::from_path).collect()
                }
                Ok(_) => {
                    log::warn!(
                        "no images found in {}",
                        config.image_dir.display()
                    );
                    Vec::new()
                }
                Err(err) => {
                    log::error!("{err:#}");
                    Vec::new()
                }
            };

        let state = Self {
            hero: Crossfade::new(cards.len(), Instant::now()),
            strip: DragStrip::new(tuning),
            strip_id: scrollable::Id::unique(),
            strip_viewport_width: layout::strip_viewport_width(window::WIDTH),
            cursor_x: 0.0,
            last_wheel: None,
            cards,
        };
        (state, Task::none())
    }
}
