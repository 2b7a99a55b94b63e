// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the search flow.
//!
//! The `App` struct wires together the search session, the thumbnail cache,
//! the lightbox, localization, and the toast manager, and translates
//! messages into side effects like API fetches. This file intentionally
//! keeps policy decisions (window size, API key resolution, startup query)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api;
use crate::config;
use crate::i18n::I18n;
use crate::search;
use crate::ui::lightbox::Lightbox;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the search session, UI components,
/// and localization.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Resolved Pixabay API key (config override or embedded default).
    api_key: String,
    /// Transient content of the search input field.
    search_input: String,
    /// Query/pagination/result state for the active search.
    session: search::Session,
    /// Downloaded thumbnails keyed by hit id; cleared on query change.
    thumbnails: HashMap<u64, image::Handle>,
    /// The open lightbox, if any; independent of search state.
    lightbox: Option<Lightbox>,
    /// Shared rotation angle for loading spinners (radians).
    spinner_rotation: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.session.query())
            .field("hits", &self.session.hits().len())
            .field("lightbox_open", &self.lightbox.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            api_key: api::DEFAULT_API_KEY.to_string(),
            search_input: String::new(),
            session: search::Session::new(),
            thumbnails: HashMap::new(),
            lightbox: None,
            spinner_rotation: 0.0,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
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
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Initializes application state and optionally kicks off a search for
    /// the query received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(err) => {
                eprintln!("Failed to load settings: {err}");
                (config::Config::default(), Some("notification-config-load-error"))
            }
        };

        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();
        if let Some(key) = config.api_key {
            app.api_key = key;
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.query {
            Some(query) => {
                app.search_input = query;
                app.update(Message::SearchBar(crate::ui::search_bar::Message::Submitted))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.session.query().is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.session.query())
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.session.is_loading(),
            self.notifications.has_notifications(),
            self.lightbox.as_ref().is_some_and(Lightbox::is_waiting),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
