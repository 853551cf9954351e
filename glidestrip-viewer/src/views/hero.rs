//! Hero banner: a full-width image that rotates with a crossfade.

use iced::widget::{container, image, stack, text};
use iced::{ContentFit, Element, Length};

use crate::infra::constants::hero;
use crate::messages::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    if state.cards.is_empty() {
        return container(text("No images to show").size(18))
            .width(Length::Fill)
            .height(Length::Fixed(hero::HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let banner = |index: usize| {
        image(state.cards[index % state.cards.len()].clone())
            .width(Length::Fill)
            .height(Length::Fixed(hero::HEIGHT))
            .content_fit(ContentFit::Cover)
    };

    // incoming image underneath, outgoing on top fading out
    let layers = stack(vec![
        banner(state.hero.back()).into(),
        banner(state.hero.front()).opacity(state.hero.opacity()).into(),
    ]);

    container(layers)
        .width(Length::Fill)
        .height(Length::Fixed(hero::HEIGHT))
        .into()
}
