// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox showing one large image with its tag text.
//!
//! Opening and closing is pure state mutation owned by the application; the
//! full-size image itself arrives asynchronously and a spinner is shown
//! until it does. Any click on the layer, or Escape, dismisses it.

use crate::api::FetchedImage;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Image;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, Color, ContentFit, Element, Length};

/// State of the open lightbox.
#[derive(Debug, Clone)]
pub struct Lightbox {
    /// URL of the full-size rendition being shown.
    pub large_url: String,
    /// Tag text doubling as the image caption.
    pub tags: String,
    /// The downloaded image; `None` while the fetch is outstanding.
    pub image: Option<FetchedImage>,
}

impl Lightbox {
    #[must_use]
    pub fn open(large_url: String, tags: String) -> Self {
        Self {
            large_url,
            tags,
            image: None,
        }
    }

    /// Whether the full-size image is still downloading.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.image.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked the layer or pressed Escape.
    CloseRequested,
}

pub fn view<'a>(state: &'a Lightbox, i18n: &'a I18n, spinner_rotation: f32) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match &state.image {
        Some(image) => {
            let picture = Image::new(image.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill);

            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(picture)
                .push(Text::new(state.tags.as_str()).size(typography::BODY_LG))
                .push(
                    Text::new(i18n.tr("lightbox-close-hint"))
                        .size(typography::CAPTION)
                        .color(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..palette::WHITE
                        }),
                )
                .into()
        }
        None => Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element())
            .push(Text::new(i18n.tr("lightbox-loading")).size(typography::BODY_LG))
            .into(),
    };

    let backdrop = Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::lightbox_backdrop);

    mouse_area(backdrop).on_press(Message::CloseRequested).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshly_opened_lightbox_is_waiting() {
        let lightbox = Lightbox::open("https://example.org/l.jpg".into(), "cats".into());
        assert!(lightbox.is_waiting());
        assert_eq!(lightbox.large_url, "https://example.org/l.jpg");
    }

    #[test]
    fn lightbox_with_image_is_not_waiting() {
        let mut lightbox = Lightbox::open("https://example.org/l.jpg".into(), "cats".into());
        lightbox.image = Some(FetchedImage::from_rgba(1, 1, vec![0, 0, 0, 255]));
        assert!(!lightbox.is_waiting());
    }
}
