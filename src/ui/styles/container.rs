// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window layer behind the lightbox image.
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder tile shown while a thumbnail is still downloading.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = lightbox_backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
                assert_eq!(color.r, 0.0);
            }
            _ => panic!("expected a background color"),
        }
    }
}
