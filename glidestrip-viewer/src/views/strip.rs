//! The draggable card strip.
//!
//! A hidden-scrollbar horizontal scrollable carries the card row; the
//! machine's offset is written into it programmatically. The rubber-band
//! pull is realized with edge spacers: the left pull pushes the content
//! right while the offset rests at zero, the right pull widens the content
//! so the offset can travel past `max_scroll` by exactly the excess.

use iced::widget::{Space, container, image, mouse_area, row, scrollable, text};
use iced::{ContentFit, Element, Length, mouse};

use crate::infra::constants::strip;
use crate::layout;
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    let viewport_width = state.strip_viewport_width;
    let card_width = layout::card_width(viewport_width);
    let card_height = layout::card_height(viewport_width);

    if state.cards.is_empty() {
        return container(
            text("Set GLIDESTRIP_IMAGE_DIR to a directory of images").size(14),
        )
        .width(Length::Fill)
        .height(Length::Fixed(card_height.min(200.0)))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    }

    let cards = row(state.cards.iter().map(|handle| {
        container(
            image(handle.clone())
                .width(Length::Fixed(card_width))
                .height(Length::Fixed(card_height))
                .content_fit(ContentFit::Cover),
        )
        .into()
    }))
    .spacing(strip::CARD_GAP);

    let over = state.strip.overscroll();
    let content = row![
        Space::with_width(Length::Fixed(over.left)),
        cards,
        Space::with_width(Length::Fixed(over.right)),
    ];

    let track = scrollable(content)
        .id(state.strip_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0.0)
                .margin(0.0)
                .scroller_width(0.0),
        ))
        .on_scroll(Message::TrackScrolled)
        .width(Length::Fill)
        .height(Length::Fixed(card_height));

    mouse_area(track)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_exit(Message::PointerExited)
        .interaction(mouse::Interaction::Grab)
        .into()
}
