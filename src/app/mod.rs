// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the host page and the viewer.
//!
//! The `App` struct wires together the gallery source, the image store, the
//! host page and, while one is open, the gallery viewer. It translates
//! component effects into side effects: opening and closing the viewer,
//! restoring the page scroll, and downloading remote images.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::media::{self, fetch, ImageStore};
use crate::ui::gallery::{self, OpenRequest, ViewEnv, ViewerOptions};
use crate::ui::host;
use crate::ui::theming::ThemeMode;
use iced::widget::{opaque, Stack};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Images fetched on each side of the current one while browsing.
const PREFETCH_RADIUS: usize = 1;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    viewer_options: ViewerOptions,
    sort_order: config::SortOrder,
    host: host::State,
    viewer: Option<gallery::State>,
    store: ImageStore,
    client: Option<reqwest::Client>,
    window_size: Size,
    /// Viewer index requested on the command line, used once.
    pending_start: Option<isize>,
    /// Viewer heading requested on the command line.
    title_override: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.host.gallery().len())
            .field("viewer_open", &self.viewer.is_some())
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off loading the gallery named
    /// by the launcher flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let client = match fetch::client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(%err, "remote images disabled");
                None
            }
        };

        let mut host = host::State::new(config.thumbnail_size(), default_window_size());
        host.set_notice(config_warning);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            viewer_options: config.viewer_options(),
            sort_order: config.sort_order(),
            host,
            viewer: None,
            store: ImageStore::new(config.remote_cache_entries()),
            client,
            window_size: default_window_size(),
            pending_start: flags.start,
            title_override: flags.title.filter(|title| !title.trim().is_empty()),
        };

        let task = match flags.path {
            Some(path) => app.load_gallery(PathBuf::from(path)),
            None => {
                tracing::info!("no gallery path given");
                Task::none()
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.host.gallery().title() {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_host_subscription(),
            subscription::create_viewer_subscription(self.viewer.is_some()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let page = self.host.view(&self.i18n, &self.store).map(Message::Host);

        match &self.viewer {
            Some(viewer) => {
                let env = ViewEnv {
                    i18n: &self.i18n,
                    store: &self.store,
                };
                // The viewer layer swallows pointer input so the page
                // underneath never scrolls or receives clicks.
                Stack::new()
                    .push(page)
                    .push(opaque(viewer.view(env).map(Message::Viewer)))
                    .into()
            }
            None => page,
        }
    }

    /// Whether a viewer is currently open.
    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_some()
    }

    /// Current viewer index, if a viewer is open.
    #[must_use]
    pub fn viewer_index(&self) -> Option<usize> {
        self.viewer.as_ref().map(gallery::State::current_index)
    }

    fn load_gallery(&self, path: PathBuf) -> Task<Message> {
        let sort_order = self.sort_order;
        tracing::info!(path = %path.display(), "loading gallery");
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || media::open_path(&path, sort_order))
                    .await
                    .map_err(|err| crate::error::Error::Io(err.to_string()))?
            },
            Message::GalleryLoaded,
        )
    }

    /// Opens the viewer at `index`, closing any viewer already open.
    fn open_viewer(&mut self, index: Option<isize>) -> Task<Message> {
        if self.host.gallery().is_empty() {
            tracing::debug!("not opening viewer on an empty gallery");
            return Task::none();
        }

        // The old viewer must let go of the page before the new one pins it.
        let mut restore = Task::none();
        if let Some(previous) = self.viewer.take() {
            drop(previous);
            restore = self.host.restore_task();
        }

        let request = OpenRequest {
            images: self.host.gallery().shared_images(),
            initial_index: index,
            title: self
                .title_override
                .clone()
                .or_else(|| self.host.gallery().title().map(str::to_string)),
        };
        let viewer = gallery::State::open(
            request,
            self.viewer_options,
            self.window_size,
            Some(self.host.surface()),
        );
        let current = viewer.current_index();
        self.viewer = Some(viewer);

        Task::batch([restore, self.prefetch_around(current)])
    }

    /// Starts downloads for the images in `indices` that need one.
    fn prefetch(&mut self, indices: impl IntoIterator<Item = usize>) -> Task<Message> {
        let images: Vec<GalleryImage> = indices
            .into_iter()
            .filter_map(|index| self.host.gallery().images().get(index).cloned())
            .collect();

        let mut tasks = Vec::new();
        for image in &images {
            let Some(url) = self.store.prepare(image) else {
                continue;
            };
            match &self.client {
                Some(client) => tasks.push(Task::perform(
                    fetch::fetch_remote(client.clone(), url.clone()),
                    move |result| Message::ImageFetched { url, result },
                )),
                None => self.store.complete(
                    url,
                    Err(crate::error::Error::Fetch("HTTP client unavailable".into())),
                ),
            }
        }

        tracing::debug!(
            started = tasks.len(),
            in_flight = self.store.pending(),
            "image downloads requested"
        );
        Task::batch(tasks)
    }

    /// Requests the thumbnails currently on the host page.
    ///
    /// The cache grows to hold them together with the viewer's neighbours,
    /// so prefetching never evicts what is on screen.
    fn prefetch_visible(&mut self) -> Task<Message> {
        let visible = self.host.visible_range();
        self.store.reserve(visible.len() + 2 * PREFETCH_RADIUS + 1);
        self.prefetch(visible)
    }

    fn prefetch_around(&mut self, index: usize) -> Task<Message> {
        let len = self.host.gallery().len();
        if len == 0 {
            return Task::none();
        }
        let radius = PREFETCH_RADIUS.min(len / 2);
        let indices: Vec<usize> = (0..=2 * radius)
            .map(|offset| (index + len + offset - radius) % len)
            .collect();
        self.prefetch(indices)
    }
}

#[cfg(test)]
impl App {
    /// Default settings in the default window, without touching the user's
    /// config directory.
    fn for_tests(cache_entries: usize) -> Self {
        let settings = config::Config::default();
        Self {
            i18n: I18n::new(Some("en-US".to_string()), &settings),
            theme_mode: ThemeMode::default(),
            viewer_options: settings.viewer_options(),
            sort_order: settings.sort_order(),
            host: host::State::new(settings.thumbnail_size(), default_window_size()),
            viewer: None,
            store: ImageStore::new(cache_entries),
            client: fetch::client().ok(),
            window_size: default_window_size(),
            pending_start: None,
            title_override: None,
        }
    }
}
