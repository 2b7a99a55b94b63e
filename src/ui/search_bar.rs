// SPDX-License-Identifier: MPL-2.0
//! Search bar: free-text input plus a submit button.
//!
//! The input text itself is owned by the application state; this component
//! only renders it and forwards edits and submissions.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// The input field content changed.
    InputChanged(String),
    /// The user pressed Enter or the search button.
    Submitted,
}

pub fn view<'a>(i18n: &'a I18n, value: &'a str) -> Element<'a, Message> {
    let placeholder = i18n.tr("search-placeholder");

    let input = text_input(&placeholder, value)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let submit = button(Text::new(i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::Submitted)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit)
        .into()
}
