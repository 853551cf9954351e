use std::time::Instant;

use iced::widget::scrollable;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary button pressed over the strip.
    PointerPressed,
    /// Pointer moved over the strip.
    PointerMoved(iced::Point),
    /// Primary button released over the strip.
    PointerReleased,
    /// Pointer left the strip; ends any drag like a release.
    PointerExited,
    /// The strip's scrollable reported its viewport (native scrolling or an
    /// echo of our own offset writes).
    TrackScrolled(scrollable::Viewport),
    /// Frame-synchronized tick with the subscription timestamp.
    Frame(Instant),
    /// Keyboard step left.
    StepLeft,
    /// Keyboard step right.
    StepRight,
    /// The window was resized.
    WindowResized(iced::Size),
}
