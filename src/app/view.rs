// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: search bar + gallery content, the lightbox (when
//! open), and the toast overlay.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::notifications::Toast;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{empty_state, gallery, lightbox, load_more, search_bar};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let search_bar = search_bar::view(&app.i18n, &app.search_input).map(Message::SearchBar);

    let content: Element<'_, Message> = if app.session.hits().is_empty() {
        if app.session.is_loading() {
            // First page still in flight: centered spinner instead of the
            // start text.
            Container::new(
                AnimatedSpinner::new(palette::PRIMARY_500, app.spinner_rotation).into_element(),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
        } else {
            empty_state::view(&app.i18n)
        }
    } else {
        let gallery =
            gallery::view(&app.i18n, app.session.hits(), &app.thumbnails).map(Message::Gallery);

        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(gallery);

        if app.session.has_more() {
            column = column.push(
                load_more::view(&app.i18n, app.session.is_loading(), app.spinner_rotation)
                    .map(Message::LoadMore),
            );
        }

        scrollable(
            Container::new(column)
                .width(Length::Fill)
                .padding(spacing::MD),
        )
        .height(Length::Fill)
        .into()
    };

    let base = Column::new()
        .push(search_bar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if let Some(state) = &app.lightbox {
        layers = layers.push(
            lightbox::view(state, &app.i18n, app.spinner_rotation).map(Message::Lightbox),
        );
    }

    layers = layers.push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    layers.into()
}
