// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};

/// Routes native keyboard events. Escape dismisses the lightbox; the update
/// logic treats the request as a no-op when no lightbox is open.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::CloseRequested)),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// spinner animation. Idle when nothing needs ticking.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
    lightbox_waiting: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications || lightbox_waiting {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
