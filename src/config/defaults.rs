// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lifetime**: Auto-dismiss and exit animation timings
//! - **Capacity**: Per-position entry bounds
//! - **Pausing**: Hover and focus-loss behavior
//! - **Layout**: Values forwarded to the presentation layer

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// Default auto-dismiss duration for a new toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Delay between a toast entering its exit sequence and being purged
/// (in milliseconds). Reserved for the exit animation.
pub const EXIT_ANIMATION_DELAY_MS: u64 = 300;

/// Interval of the periodic tick subscription (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of toasts per screen position.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum allowed per-position capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum allowed per-position capacity.
pub const MAX_MAX_TOASTS: usize = 50;

// ==========================================================================
// Pausing Defaults
// ==========================================================================

/// Whether hovering a toast pauses its auto-dismiss timer.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Whether losing window focus pauses every auto-dismiss timer.
pub const DEFAULT_PAUSE_ON_FOCUS_LOSS: bool = true;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical gap between stacked toasts (in logical pixels).
pub const DEFAULT_GAP: u16 = 8;

/// Horizontal distance from the screen edge (in logical pixels).
pub const DEFAULT_OFFSET_X: u16 = 16;

/// Vertical distance from the screen edge (in logical pixels).
pub const DEFAULT_OFFSET_Y: u16 = 16;
