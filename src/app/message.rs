// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, FetchedImage, SearchPage};
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::load_more;
use crate::ui::notifications;
use crate::ui::search_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Gallery(gallery::Message),
    LoadMore(load_more::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// A search fetch settled. `generation` identifies the submit that
    /// issued it so responses for superseded queries can be discarded.
    SearchCompleted {
        generation: u64,
        result: Result<SearchPage, ApiError>,
    },
    /// A gallery thumbnail finished downloading.
    ThumbnailLoaded {
        id: u64,
        result: Result<FetchedImage, ApiError>,
    },
    /// The lightbox full-size image finished downloading.
    LightboxImageLoaded {
        url: String,
        result: Result<FetchedImage, ApiError>,
    },
    /// Periodic tick for notification auto-dismiss and spinner animation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional query to search for immediately on startup.
    pub query: Option<String>,
}
