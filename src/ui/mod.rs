// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual foundations.

pub mod design_tokens;
pub mod empty_state;
pub mod gallery;
pub mod lightbox;
pub mod load_more;
pub mod notifications;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
