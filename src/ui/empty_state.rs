// SPDX-License-Identifier: MPL-2.0
//! Start view displayed before the first search has produced results.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let icon = Text::new("🔎").size(sizing::ICON_XL);

    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
