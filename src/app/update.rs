// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The fetch cycle lives here: `submit`/`advance` on the search session
//! produce a [`FetchRequest`] which is dispatched as an async task, and the
//! resulting `SearchCompleted` message is settled back into the session.
//! Notifications are derived from the settle outcome, never from the raw
//! response.

use super::{App, Message};
use crate::api::{self, ApiError, FetchedImage, SearchPage};
use crate::search::{FetchRequest, Settled};
use crate::ui::gallery;
use crate::ui::lightbox::{self, Lightbox};
use crate::ui::load_more;
use crate::ui::notifications::Notification;
use crate::ui::search_bar;
use iced::Task;
use std::f32::consts::TAU;

/// Spinner advance per 100ms tick, in radians.
const SPINNER_STEP: f32 = 0.35;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SearchBar(message) => handle_search_bar(app, message),
        Message::Gallery(gallery::Message::ImagePressed { large_url, tags }) => {
            open_lightbox(app, large_url, tags)
        }
        Message::LoadMore(load_more::Message::Pressed) => match app.session.advance() {
            Some(request) => dispatch_search(app.api_key.clone(), request),
            None => Task::none(),
        },
        Message::Lightbox(lightbox::Message::CloseRequested) => {
            // No-op when already closed.
            app.lightbox = None;
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::SearchCompleted { generation, result } => {
            handle_search_completed(app, generation, result)
        }
        Message::ThumbnailLoaded { id, result } => handle_thumbnail_loaded(app, id, result),
        Message::LightboxImageLoaded { url, result } => {
            handle_lightbox_image_loaded(app, url, result)
        }
        Message::Tick(_now) => handle_tick(app),
    }
}

fn handle_search_bar(app: &mut App, message: search_bar::Message) -> Task<Message> {
    match message {
        search_bar::Message::InputChanged(value) => {
            app.search_input = value;
            Task::none()
        }
        search_bar::Message::Submitted => match app.session.submit(&app.search_input) {
            Some(request) => {
                // The accumulated thumbnails belong to the superseded query.
                app.thumbnails.clear();
                dispatch_search(app.api_key.clone(), request)
            }
            None => Task::none(),
        },
    }
}

fn dispatch_search(api_key: String, request: FetchRequest) -> Task<Message> {
    let FetchRequest {
        query,
        page,
        generation,
    } = request;

    Task::perform(api::search(api_key, query, page), move |result| {
        Message::SearchCompleted { generation, result }
    })
}

fn handle_search_completed(
    app: &mut App,
    generation: u64,
    result: Result<SearchPage, ApiError>,
) -> Task<Message> {
    match result {
        Ok(page) => match app.session.settle_page(generation, page) {
            Settled::Loaded {
                appended,
                total_hits,
                first_page,
            } => {
                if first_page {
                    app.notifications.push(
                        Notification::success("notification-search-success")
                            .with_arg("total", total_hits.to_string()),
                    );
                }
                fetch_new_thumbnails(app, appended)
            }
            Settled::Empty => {
                app.notifications
                    .push(Notification::failure("notification-search-empty"));
                Task::none()
            }
            Settled::Failed | Settled::Stale => Task::none(),
        },
        Err(err) => {
            eprintln!("Search request failed: {err}");
            if app.session.settle_error(generation) == Settled::Failed {
                app.notifications
                    .push(Notification::failure("notification-search-failed"));
            }
            Task::none()
        }
    }
}

/// Spawns one download task per freshly appended hit.
fn fetch_new_thumbnails(app: &App, appended: usize) -> Task<Message> {
    let hits = app.session.hits();
    let start = hits.len() - appended;

    let tasks: Vec<Task<Message>> = hits[start..]
        .iter()
        .filter(|hit| !app.thumbnails.contains_key(&hit.id))
        .map(|hit| {
            let id = hit.id;
            Task::perform(api::fetch_image(hit.webformat_url.clone()), move |result| {
                Message::ThumbnailLoaded { id, result }
            })
        })
        .collect();

    Task::batch(tasks)
}

fn handle_thumbnail_loaded(
    app: &mut App,
    id: u64,
    result: Result<FetchedImage, ApiError>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            // A download for a superseded query resolves after the hit list
            // was reset; only keep bytes for hits still on display.
            if app.session.hits().iter().any(|hit| hit.id == id) {
                app.thumbnails.insert(id, image.handle);
            }
        }
        Err(err) => {
            eprintln!("Thumbnail download failed: {err}");
        }
    }
    Task::none()
}

fn open_lightbox(app: &mut App, large_url: String, tags: String) -> Task<Message> {
    app.lightbox = Some(Lightbox::open(large_url.clone(), tags));

    Task::perform(api::fetch_image(large_url.clone()), move |result| {
        Message::LightboxImageLoaded {
            url: large_url.clone(),
            result,
        }
    })
}

fn handle_lightbox_image_loaded(
    app: &mut App,
    url: String,
    result: Result<FetchedImage, ApiError>,
) -> Task<Message> {
    if let Some(lightbox) = &mut app.lightbox {
        // The lightbox may have been closed and reopened on another hit
        // while this download was in flight.
        if lightbox.large_url == url {
            match result {
                Ok(image) => lightbox.image = Some(image),
                Err(err) => {
                    eprintln!("Full-size image download failed: {err}");
                }
            }
        }
    }
    Task::none()
}

fn handle_tick(app: &mut App) -> Task<Message> {
    app.notifications.tick();

    let animating =
        app.session.is_loading() || app.lightbox.as_ref().is_some_and(Lightbox::is_waiting);
    if animating {
        app.spinner_rotation = (app.spinner_rotation + SPINNER_STEP) % TAU;
    }

    Task::none()
}
