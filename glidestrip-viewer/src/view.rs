//! Root view composition: hero banner, section header, card strip.

use iced::widget::{column, container, text};
use iced::{Element, Length, Padding};

use crate::infra::constants::strip;
use crate::messages::Message;
use crate::state::State;
use crate::views;

pub fn view(state: &State) -> Element<'_, Message> {
    let header = column![
        text("Guest gallery").size(28),
        text("Hold and drag the cards to glide; arrow keys page through.")
            .size(14),
    ]
    .spacing(4.0);

    let page = column![
        views::hero::view(state),
        header,
        views::strip::view(state),
    ]
    .spacing(strip::SECTION_GAP)
    .padding(Padding {
        top: 0.0,
        right: strip::HORIZONTAL_PADDING_SIDE,
        bottom: strip::SECTION_GAP,
        left: strip::HORIZONTAL_PADDING_SIDE,
    });

    container(page).width(Length::Fill).into()
}
