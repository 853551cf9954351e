//! Root subscription composition.
//!
//! The frame tick is always present but runs at a relaxed cadence when
//! nothing animates; it tightens to ~120 FPS while the strip or the hero
//! crossfade is in motion. Input listening is unconditional.

use std::time::Duration;

use iced::event::{self, Event, Status};
use iced::keyboard::{self, Key, key::Named};
use iced::{Subscription, window};

use crate::infra::constants::ticks;
use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let cadence = if state.strip.needs_frames() || state.hero.is_fading() {
        Duration::from_nanos(ticks::FAST_TICK_NS)
    } else {
        Duration::from_millis(ticks::IDLE_TICK_MS)
    };

    Subscription::batch([
        iced::time::every(cadence).map(Message::Frame),
        event::listen_with(input_events),
    ])
}

fn input_events(
    event: Event,
    _status: Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if modifiers.control() || modifiers.alt() || modifiers.logo() {
                return None;
            }
            match key {
                Key::Named(Named::ArrowRight) => Some(Message::StepRight),
                Key::Named(Named::ArrowLeft) => Some(Message::StepLeft),
                _ => None,
            }
        }
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    }
}
