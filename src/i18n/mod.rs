// SPDX-License-Identifier: MPL-2.0
//! Internationalization via Fluent, with `.ftl` assets embedded at build time.

pub mod fluent;

pub use fluent::I18n;
