// SPDX-License-Identifier: MPL-2.0
//! Host page: a scrollable grid of thumbnails that opens the viewer.
//!
//! The page owns the scroll position the viewer pins while it is open.
//! [`PageScroll`] is the [`ScrollSurface`] handed to the viewer; after the
//! lock releases, [`State::restore_task`] moves the real scrollable back to
//! the captured offset.

use crate::domain::gallery::Gallery;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{ImageStatus, ImageStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{BodyPosition, ScrollSurface, SharedSurface};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::Image;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{button, operation, Column, Container, Id, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length, Size, Task};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// Identifier of the thumbnail grid scrollable.
pub const SCROLLABLE_ID: &str = "host-grid";

// =============================================================================
// Scroll surface
// =============================================================================

/// Scroll state of the host page.
#[derive(Debug, Default)]
pub struct PageScroll {
    offset: f32,
    body: BodyPosition,
    pending_restore: Option<f32>,
}

impl PageScroll {
    /// Records a scroll reported by the grid. Ignored while pinned.
    ///
    /// Returns `true` if the offset was taken.
    pub fn record_scroll(&mut self, offset: f32) -> bool {
        if self.body.is_fixed() {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Takes the offset the grid must scroll back to, if a restore is owed.
    pub fn take_pending_restore(&mut self) -> Option<f32> {
        self.pending_restore.take()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.body.is_fixed()
    }
}

impl ScrollSurface for PageScroll {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn body_position(&self) -> BodyPosition {
        self.body
    }

    fn set_body_position(&mut self, position: BodyPosition) {
        self.body = position;
    }

    fn scroll_to(&mut self, offset: f32) {
        self.offset = offset;
        self.pending_restore = Some(offset);
    }
}

// =============================================================================
// Component
// =============================================================================

/// What the page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Nothing requested yet, or a load is running.
    Loading,
    /// A gallery is shown.
    Ready,
    /// Loading failed.
    Failed(Error),
}

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    Scrolled(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the viewer at this index.
    Open(usize),
    /// Different thumbnails may be on screen now.
    Revealed,
}

#[derive(Debug)]
pub struct State {
    gallery: Gallery,
    status: Status,
    scroll: Rc<RefCell<PageScroll>>,
    thumbnail_size: f32,
    window: Size,
    highlighted: Option<usize>,
    notice: Option<String>,
}

impl State {
    #[must_use]
    pub fn new(thumbnail_size: f32, window: Size) -> Self {
        Self {
            gallery: Gallery::default(),
            status: Status::Loading,
            scroll: Rc::new(RefCell::new(PageScroll::default())),
            thumbnail_size,
            window,
            highlighted: None,
            notice: None,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ThumbnailPressed(index) if index < self.gallery.len() => Effect::Open(index),
            Message::ThumbnailPressed(index) => {
                tracing::warn!(index, "thumbnail index out of range");
                Effect::None
            }
            Message::Scrolled(offset) => {
                if self.scroll.borrow_mut().record_scroll(offset) {
                    Effect::Revealed
                } else {
                    tracing::trace!(offset, "page pinned, scroll ignored");
                    Effect::None
                }
            }
        }
    }

    pub fn set_gallery(&mut self, gallery: Gallery) {
        tracing::info!(images = gallery.len(), "gallery loaded");
        self.gallery = gallery;
        self.status = Status::Ready;
        self.highlighted = None;
    }

    pub fn set_failed(&mut self, error: Error) {
        tracing::error!(%error, "gallery failed to load");
        self.status = Status::Failed(error);
    }

    /// Shows a translated notice (an i18n key) above the grid.
    pub fn set_notice(&mut self, key: Option<String>) {
        self.notice = key;
    }

    pub fn resize(&mut self, window: Size) {
        self.window = window;
    }

    /// Marks the thumbnail of the image last shown in the viewer.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The surface the viewer pins while open.
    #[must_use]
    pub fn surface(&self) -> SharedSurface {
        self.scroll.clone()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.borrow().scroll_offset()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.borrow().is_locked()
    }

    /// Scrolls the grid back to where it was when the viewer opened.
    pub fn restore_task<T: Send + 'static>(&self) -> Task<T> {
        match self.scroll.borrow_mut().take_pending_restore() {
            Some(offset) => {
                tracing::debug!(offset, "restoring page scroll");
                operation::scroll_to(Id::new(SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y: offset })
            }
            None => Task::none(),
        }
    }

    /// Number of grid columns that fit the window.
    #[must_use]
    pub fn columns(&self) -> usize {
        let usable = (self.window.width - 2.0 * spacing::LG).max(0.0);
        let cell = self.thumbnail_size + spacing::XS;
        ((usable + spacing::XS) / cell).floor().max(1.0) as usize
    }

    /// Indices of the thumbnails on screen, plus one row either side.
    ///
    /// Rows are measured from the top of the page, so the header above the
    /// grid only widens the range.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.gallery.len();
        let columns = self.columns();
        let row_height = self.thumbnail_size + spacing::XS;
        let offset = self.scroll_offset().max(0.0);

        let first_row = ((offset / row_height).floor() as usize).saturating_sub(1);
        let last_row = ((offset + self.window.height) / row_height).ceil() as usize + 1;

        (first_row * columns).min(len)..(last_row * columns).min(len)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, store: &'a ImageStore) -> Element<'a, Message> {
        let title = self
            .gallery
            .title()
            .map_or_else(|| i18n.tr("host-title"), str::to_string);

        let mut page = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(Text::new(title).size(typography::TITLE_MD));

        if let Some(key) = &self.notice {
            page = page.push(Text::new(i18n.tr(key)).size(typography::BODY));
        }

        let body: Element<'a, Message> = match &self.status {
            Status::Loading => Text::new(i18n.tr("host-loading")).into(),
            Status::Failed(error) => Text::new(i18n.tr(error.i18n_key())).into(),
            Status::Ready if self.gallery.is_empty() => Text::new(i18n.tr("host-empty")).into(),
            Status::Ready => {
                let count = i64::try_from(self.gallery.len()).unwrap_or(i64::MAX);
                page = page.push(
                    Text::new(i18n.tr_with_args("host-image-count", &[("count", count)]))
                        .size(typography::CAPTION),
                );
                self.grid(store)
            }
        };

        let content = page.push(body);

        Scrollable::new(content)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
            .into()
    }

    fn grid<'a>(&'a self, store: &'a ImageStore) -> Element<'a, Message> {
        let columns = self.columns();
        let size = Length::Fixed(self.thumbnail_size);

        let rows = self
            .gallery
            .images()
            .chunks(columns)
            .enumerate()
            .map(|(row_index, chunk)| -> Element<'a, Message> {
                chunk
                    .iter()
                    .enumerate()
                    .fold(Row::new().spacing(spacing::XS), |row, (column, image)| {
                        let index = row_index * columns + column;
                        let content: Element<'a, Message> = match store.status(image) {
                            ImageStatus::Ready(handle) => Image::new(handle)
                                .width(Length::Fill)
                                .height(Length::Fill)
                                .content_fit(ContentFit::Cover)
                                .into(),
                            ImageStatus::Idle | ImageStatus::Loading | ImageStatus::Failed => {
                                Container::new(Text::new(image.id().as_str()).size(typography::CAPTION))
                                    .width(Length::Fill)
                                    .height(Length::Fill)
                                    .style(styles::container::placeholder)
                                    .into()
                            }
                        };
                        row.push(
                            button(content)
                                .width(size)
                                .height(size)
                                .padding(2)
                                .on_press(Message::ThumbnailPressed(index))
                                .style(styles::button_thumbnail(self.highlighted == Some(index))),
                        )
                    })
                    .into()
            });

        Column::with_children(rows)
            .spacing(spacing::XS)
            .align_x(Horizontal::Left)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::GalleryImage;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::gallery::ScrollLock;

    fn gallery(count: usize) -> Gallery {
        let images = (0..count)
            .map(|i| GalleryImage::new(format!("p{i}"), format!("/photos/{i}.jpg")))
            .collect();
        Gallery::new(Some("Márkomeannu".to_string()), images).expect("unique ids")
    }

    fn page() -> State {
        State::new(160.0, Size::new(1280.0, 800.0))
    }

    #[test]
    fn thumbnail_press_opens_viewer_at_index() {
        let mut host = page();
        host.set_gallery(gallery(3));

        assert_eq!(host.handle(Message::ThumbnailPressed(2)), Effect::Open(2));
        assert_eq!(host.handle(Message::ThumbnailPressed(3)), Effect::None);
    }

    #[test]
    fn scroll_is_ignored_while_pinned_and_restored_after() {
        let mut host = page();
        host.set_gallery(gallery(30));
        host.handle(Message::Scrolled(480.0));

        let lock = ScrollLock::acquire(host.surface());
        assert!(host.is_scroll_locked());
        host.handle(Message::Scrolled(12.0));
        assert_abs_diff_eq!(host.scroll_offset(), 480.0);

        drop(lock);
        assert!(!host.is_scroll_locked());
        assert_eq!(host.scroll.borrow_mut().take_pending_restore(), Some(480.0));
        assert_eq!(host.scroll.borrow_mut().take_pending_restore(), None);
    }

    #[test]
    fn columns_follow_window_width() {
        let mut host = page();
        // (1280 - 48 + 8) / 168 = 7.38
        assert_eq!(host.columns(), 7);

        host.resize(Size::new(100.0, 800.0));
        assert_eq!(host.columns(), 1);
    }

    #[test]
    fn scrolling_reveals_thumbnails_unless_pinned() {
        let mut host = page();
        host.set_gallery(gallery(10));
        assert_eq!(host.handle(Message::Scrolled(50.0)), Effect::Revealed);

        let _lock = ScrollLock::acquire(host.surface());
        assert_eq!(host.handle(Message::Scrolled(90.0)), Effect::None);
    }

    #[test]
    fn visible_range_follows_scroll_offset() {
        let mut host = State::new(160.0, Size::new(1024.0, 720.0));
        host.set_gallery(gallery(60));
        // 5 columns of 168 px rows; 720 px shows rows 0..=4, plus one below.
        assert_eq!(host.visible_range(), 0..30);

        host.handle(Message::Scrolled(1200.0));
        // Rows 7..=11 on screen, widened to 6..=12.
        assert_eq!(host.visible_range(), 30..60);
    }

    #[test]
    fn visible_range_is_clamped_to_gallery() {
        let mut host = page();
        assert_eq!(host.visible_range(), 0..0);

        host.set_gallery(gallery(3));
        host.handle(Message::Scrolled(5000.0));
        assert_eq!(host.visible_range(), 3..3);
    }

    #[test]
    fn failed_load_keeps_error_for_display() {
        let mut host = page();
        host.set_failed(Error::Manifest("broken".to_string()));
        assert_eq!(host.status(), &Status::Failed(Error::Manifest("broken".to_string())));
    }
}
