// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive toasts report search outcomes without blocking interaction.
//! All toasts here are transient: success messages dismiss after three
//! seconds, failures after five, and every toast carries a manual dismiss
//! button. At most three toasts are visible at once; the rest queue.
//!
//! Rendering uses a fixed visual configuration: 380px wide, stacked in the
//! top-right corner 10px from the window edge, 20px text, 12px corner
//! radius.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
