// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! This module provides an in-process notification queue following
//! toast/snackbar UX patterns. The manager owns the list of active toasts
//! and their timers; a separate presentation layer renders whatever list
//! the manager reports and sends user actions back as [`Message`]s.
//!
//! # Components
//!
//! - [`notification`] - `Toast` entry, its id and the category/position enums
//! - [`options`] - `ToastOptions` builder shared by create and update
//! - [`timer`] - Cancellable per-toast expiry and purge timers
//! - [`manager`] - `Manager` for capacity, lifecycle and publishing
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use toast_queue::config::ToastConfig;
//! use toast_queue::notifications::{Manager, Position, ToastOptions};
//!
//! let mut manager = Manager::new(ToastConfig::default());
//!
//! let id = manager.loading("Uploading…", ToastOptions::new().duration(Duration::ZERO));
//! manager.update(
//!     &id,
//!     "Upload complete",
//!     ToastOptions::new().duration(Duration::from_millis(500)),
//! );
//!
//! assert_eq!(manager.bucket(Position::TopRight).count(), 1);
//! ```
//!
//! # Lifecycle
//!
//! - active: created, optionally updated in place
//! - removing: after expiry or dismissal, kept for the exit animation
//! - purged: 300ms later, `on_close` fires once
//!
//! Capacity eviction skips the removing state and never calls `on_close`.

pub mod manager;
pub mod notification;
pub mod options;
pub mod timer;

pub use manager::{Manager, Message as ToastMessage, EXIT_ANIMATION_DELAY};
pub use notification::{
    Category, CloseCallback, Position, Toast, ToastAction, ToastId, Variant,
};
pub use options::ToastOptions;
pub use timer::{Due, TimerKind, Timers};
