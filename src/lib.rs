// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is an in-process toast notification queue for GUI apps.
//!
//! It keeps the list of active toasts, bounds each screen position to a
//! configurable capacity, schedules auto-dismiss and exit-animation timers,
//! and publishes the list for a presentation layer to render.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.3.0")]

pub mod config;
pub mod error;
pub mod notifications;
