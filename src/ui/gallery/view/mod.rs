// SPDX-License-Identifier: MPL-2.0
//! Viewer rendering.

mod controls;
mod desktop;
mod mobile;

use super::component::{Message, State, ViewEnv};
use super::Layout;
use iced::widget::Column;
use iced::Element;

/// Renders the viewer for its current layout.
///
/// An empty gallery renders an empty element.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let Some(image) = state.current_image() else {
        return Column::new().into();
    };

    match state.layout() {
        Layout::Mobile => mobile::view(state, image, env),
        Layout::Desktop => desktop::view(state, image, env),
    }
}
