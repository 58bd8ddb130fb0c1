// SPDX-License-Identifier: MPL-2.0
//! Full-screen layout for narrow viewports.
//!
//! ```text
//! +----------------------------+
//! | title                  [x] |
//! |        o o ● o             |
//! |                            |
//! | <        image           > |
//! |                            |
//! |  caption                   |
//! |  2 / 4                     |
//! +----------------------------+
//! ```

use super::controls;
use crate::domain::gallery::GalleryImage;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery::component::{Message, State, ViewEnv};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Row, Space, Stack};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, image: &'a GalleryImage, env: ViewEnv<'a>) -> Element<'a, Message> {
    let heading: Element<'a, Message> = match controls::title(state) {
        Some(title) => Container::new(title).width(Length::Fill).into(),
        None => Space::new().width(Length::Fill).into(),
    };
    let top_bar = Row::new()
        .push(heading)
        .push(controls::close_button(env))
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::MOBILE_TOP_BAR))
        .padding([0.0, spacing::MD]);

    let mut stage = Stack::new().push(
        Container::new(controls::picture(image, env, ContentFit::Contain))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );
    if state.shows_controls() {
        let [left, right] = controls::arrow_layers(env);
        stage = stage.push(left).push(right);
    }

    let mut footer = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .height(Length::Fixed(sizing::MOBILE_CAPTION))
        .width(Length::Fill);
    if let Some(caption) = controls::caption(image) {
        footer = footer.push(caption);
    }
    footer = footer.push(controls::counter(state, env));

    let mut layout = Column::new().push(top_bar);
    if state.shows_controls() {
        layout = layout.push(Container::new(controls::dots(state, env)).center_x(Length::Fill));
    }
    let layout = layout
        .push(Container::new(stage).width(Length::Fill).height(Length::Fill))
        .push(footer);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::mobile_surface)
        .into()
}
