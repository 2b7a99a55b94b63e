// SPDX-License-Identifier: MPL-2.0
//! "Load more" control shown below the gallery while further pages remain.
//!
//! While a fetch is in flight the button is disabled and carries a small
//! spinner next to its label.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// The user requested the next page.
    Pressed,
}

pub fn view(i18n: &I18n, loading: bool, spinner_rotation: f32) -> Element<'static, Message> {
    let label = Text::new(i18n.tr("load-more-button")).size(typography::BODY_LG);

    let control = if loading {
        let spinner = AnimatedSpinner::new(palette::WHITE, spinner_rotation)
            .with_size(sizing::SPINNER_SM)
            .into_element();

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(spinner)
            .push(label);

        // No on_press: the button stays visible but inert while loading.
        button(content)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
    } else {
        button(label)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
            .on_press(Message::Pressed)
    };

    Container::new(control)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD)
        .into()
}
