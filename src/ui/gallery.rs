// SPDX-License-Identifier: MPL-2.0
//! Gallery grid of result thumbnails.
//!
//! Hits are laid out in fixed-width rows, in accumulation order. A hit whose
//! thumbnail is still downloading renders as a placeholder tile of the same
//! size so the grid does not reflow when bytes arrive.

use crate::api::ImageHit;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was activated; the lightbox should open with this hit.
    ImagePressed { large_url: String, tags: String },
}

pub fn view<'a>(
    i18n: &'a I18n,
    hits: &'a [ImageHit],
    thumbnails: &'a HashMap<u64, Handle>,
) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    for row_hits in hits.chunks(sizing::GALLERY_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for hit in row_hits {
            row = row.push(thumbnail(i18n, hit, thumbnails.get(&hit.id)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn thumbnail<'a>(
    i18n: &'a I18n,
    hit: &'a ImageHit,
    handle: Option<&Handle>,
) -> Element<'a, Message> {
    match handle {
        Some(handle) => {
            let picture = Image::new(handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover);

            button(picture)
                .padding(0.0)
                .style(styles::button::thumbnail)
                .on_press(Message::ImagePressed {
                    large_url: hit.large_image_url.clone(),
                    tags: hit.tags.clone(),
                })
                .into()
        }
        None => Container::new(Text::new(i18n.tr("thumbnail-loading")).size(typography::CAPTION))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::thumbnail_placeholder)
            .into(),
    }
}
