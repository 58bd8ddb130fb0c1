// SPDX-License-Identifier: MPL-2.0
//! Dimmed overlay layout for wide viewports.
//!
//! Layers, bottom to top: the backdrop (press closes), the centred image
//! column, the arrows, the close button. The image sits in an opaque layer
//! so pressing it never reaches the backdrop.

use super::controls;
use crate::domain::gallery::GalleryImage;
use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::gallery::component::{Message, State, ViewEnv};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, opaque, Column, Container, Space, Stack};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, image: &'a GalleryImage, env: ViewEnv<'a>) -> Element<'a, Message> {
    let viewport = state.viewport();
    let max_height = state.options().desktop_max_height.of(viewport.height);
    let max_width = viewport.width * sizing::DESKTOP_MAX_WIDTH_RATIO;

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let picture = opaque(
        mouse_area(
            Container::new(controls::picture(image, env, ContentFit::Contain))
                .max_width(max_width)
                .max_height(max_height),
        )
        .on_press(Message::ImagePressed),
    );

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center);
    if let Some(caption) = controls::caption(image) {
        details = details.push(caption);
    }
    details = details.push(controls::counter(state, env));

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .max_width(max_width);
    if let Some(title) = controls::title(state) {
        content = content.push(opaque(title));
    }
    content = content.push(picture).push(opaque(
        Container::new(details)
            .padding([spacing::XS, spacing::MD])
            .style(styles::overlay::indicator(radius::MD)),
    ));
    if state.shows_controls() && state.options().show_thumbnails {
        content = content.push(opaque(controls::thumbnail_strip(state, env)));
    }

    let mut layers = Stack::new().push(backdrop).push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    if state.shows_controls() {
        let [left, right] = controls::arrow_layers(env);
        layers = layers.push(left).push(right);
    }

    let close = Container::new(controls::close_button(env))
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

    layers
        .push(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
