//! Message dispatch: maps input events onto the drag-strip machine and
//! pushes the resulting offset back into the scrollable.

use std::time::{Duration, Instant};

use glidestrip_core::{Phase, TrackGeometry, measure};
use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use crate::layout;
use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::PointerPressed => {
            state.strip.pointer_down(state.cursor_x, Instant::now());
            Task::none()
        }
        Message::PointerMoved(point) => {
            state.cursor_x = point.x;
            if state.strip.phase() == Phase::Dragging {
                let geom = current_geometry(state);
                state.strip.pointer_move(point.x, Instant::now(), geom.as_ref());
                sync_track(state)
            } else {
                Task::none()
            }
        }
        Message::PointerReleased | Message::PointerExited => {
            let geom = current_geometry(state);
            state.strip.pointer_up(Instant::now(), geom.as_ref());
            sync_track(state)
        }
        Message::TrackScrolled(viewport) => {
            let bounds = viewport.bounds();
            if (bounds.width - state.strip_viewport_width).abs() > 0.5 {
                state.strip_viewport_width = bounds.width;
            }

            // Echoes of our own offset writes land here too; only a
            // diverging offset while idle is real external scrolling.
            let reported = viewport.absolute_offset().x;
            if state.strip.phase() == Phase::Idle
                && (reported - state.strip.scroll_offset()).abs() > 1.0
            {
                let geom = current_geometry(state);
                state.strip.sync_external_scroll(reported, geom.as_ref());
                state.last_wheel = Some(Instant::now());
            }
            Task::none()
        }
        Message::Frame(now) => {
            let geom = current_geometry(state);
            let was_animating = state.strip.needs_frames();
            state.strip.tick(now, geom.as_ref());
            state.hero.tick(now);

            if let Some(last) = state.last_wheel {
                let settle =
                    Duration::from_millis(state.strip.tuning().wheel_settle_ms);
                if now.saturating_duration_since(last) >= settle {
                    state.last_wheel = None;
                    state.strip.snap_to_nearest(now, geom.as_ref());
                }
            }

            if was_animating || state.strip.needs_frames() {
                sync_track(state)
            } else {
                Task::none()
            }
        }
        Message::StepLeft => step(state, -1),
        Message::StepRight => step(state, 1),
        Message::WindowResized(size) => {
            state.strip_viewport_width = layout::strip_viewport_width(size.width);
            Task::none()
        }
    }
}

fn step(state: &mut State, direction: i32) -> Task<Message> {
    let geom = current_geometry(state);
    state.strip.key_step(direction, Instant::now(), geom.as_ref());
    // the frame subscription drives the glide from here
    Task::none()
}

/// Probe the current layout. `None` (no images, collapsed viewport) makes
/// every machine operation a no-op.
pub fn current_geometry(state: &State) -> Option<TrackGeometry> {
    let cards = layout::card_layout(state.strip_viewport_width, state.cards.len());
    measure(&cards, state.strip_viewport_width)
}

/// Push the machine's offset into the scrollable. The left rubber-band pull
/// is rendered by a leading spacer; the right pull widens the content with a
/// trailing spacer, so it folds into the offset written here.
fn sync_track(state: &State) -> Task<Message> {
    let offset = state.strip.scroll_offset() + state.strip.overscroll().right;
    scrollable::scroll_to(
        state.strip_id.clone(),
        AbsoluteOffset { x: offset, y: 0.0 },
    )
}
