// SPDX-License-Identifier: MPL-2.0
//! Pieces shared by both layouts.

use crate::domain::gallery::GalleryImage;
use crate::media::ImageStatus;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::gallery::component::{Message, State, ViewEnv};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{button, container, scrollable, tooltip, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// The image itself, or a placeholder while it loads or when it failed.
pub fn picture<'a>(image: &GalleryImage, env: ViewEnv<'a>, fit: ContentFit) -> Element<'a, Message> {
    match env.store.status(image) {
        ImageStatus::Ready(handle) => Image::new(handle).content_fit(fit).into(),
        ImageStatus::Idle | ImageStatus::Loading => {
            placeholder(env.i18n.tr("gallery-image-loading"))
        }
        ImageStatus::Failed => placeholder(env.i18n.tr("gallery-image-unavailable")),
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .padding(spacing::XL)
        .center_x(Length::Shrink)
        .style(styles::container::placeholder)
        .into()
}

fn overlay_button<'a>(glyph: &'a str, size: f32, message: Message) -> button::Button<'a, Message> {
    button(
        Text::new(glyph)
            .size(size)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .padding(0)
    .on_press(message)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
}

fn labelled<'a>(control: button::Button<'a, Message>, label: String) -> Element<'a, Message> {
    styles::tooltip::styled(control, label, tooltip::Position::Bottom).into()
}

pub fn close_button<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    labelled(
        overlay_button("✕", typography::TITLE_MD, Message::CloseRequested),
        env.i18n.tr("gallery-close"),
    )
}

pub fn previous_button<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    labelled(
        overlay_button("◀", typography::TITLE_LG, Message::Previous),
        env.i18n.tr("gallery-previous"),
    )
}

pub fn next_button<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    labelled(
        overlay_button("▶", typography::TITLE_LG, Message::Next),
        env.i18n.tr("gallery-next"),
    )
}

/// Arrow layers placed at the left and right edges, vertically centred.
pub fn arrow_layers<'a>(env: ViewEnv<'a>) -> [Element<'a, Message>; 2] {
    let left = Container::new(previous_button(env))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center);
    let right = Container::new(next_button(env))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center);
    [left.into(), right.into()]
}

/// "2 / 4".
pub fn counter<'a>(state: &State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let current = state.position().position().unwrap_or(0);
    let total = state.position().len();
    let label = env.i18n.tr_with_args(
        "gallery-counter",
        &[
            ("current", i64::try_from(current).unwrap_or(i64::MAX)),
            ("total", i64::try_from(total).unwrap_or(i64::MAX)),
        ],
    );

    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL))
        .into()
}

pub fn caption<'a>(image: &'a GalleryImage) -> Option<Element<'a, Message>> {
    image.caption().map(|caption| {
        Text::new(caption)
            .size(typography::BODY)
            .color(palette::WHITE)
            .align_x(Horizontal::Center)
            .into()
    })
}

pub fn title<'a>(state: &'a State) -> Option<Element<'a, Message>> {
    state.title().map(|title| {
        Text::new(title)
            .size(typography::TITLE_MD)
            .color(palette::WHITE)
            .into()
    })
}

/// Tooltip label for the control that jumps to `index`.
fn go_to_label(env: ViewEnv<'_>, index: usize) -> String {
    let number = i64::try_from(index + 1).unwrap_or(i64::MAX);
    env.i18n.tr_with_args("gallery-go-to", &[("index", number)])
}

/// One dot per image; the current one is filled.
pub fn dots<'a>(state: &State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let current = state.current_index();
    (0..state.position().len())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let dot = button(Text::new(""))
                .width(Length::Fixed(sizing::DOT))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .on_press(Message::JumpTo(index))
                .style(styles::button::dot(index == current));
            row.push(styles::tooltip::styled(
                dot,
                go_to_label(env, index),
                tooltip::Position::Bottom,
            ))
        })
        .into()
}

/// Horizontally scrolling strip of thumbnails.
pub fn thumbnail_strip<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let current = state.current_index();
    let row = state
        .images()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, image)| {
            let content: Element<'a, Message> = match env.store.status(image) {
                ImageStatus::Ready(handle) => Image::new(handle)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .into(),
                ImageStatus::Idle | ImageStatus::Loading | ImageStatus::Failed => {
                    Container::new(Text::new(""))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(styles::container::placeholder)
                        .into()
                }
            };
            let thumbnail = button(content)
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .padding(2)
                .on_press(Message::JumpTo(index))
                .style(styles::button_thumbnail(index == current));
            row.push(styles::tooltip::styled(
                thumbnail,
                go_to_label(env, index),
                tooltip::Position::Top,
            ))
        });

    container(
        scrollable(row.padding(spacing::XXS)).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        )),
    )
    .center_x(Length::Fill)
    .into()
}
