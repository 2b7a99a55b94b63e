// SPDX-License-Identifier: MPL-2.0
//! `iced_finder` is a Pixabay image search client built with the Iced GUI
//! framework.
//!
//! It provides paginated image search with a thumbnail gallery and full-size
//! lightbox, and demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
