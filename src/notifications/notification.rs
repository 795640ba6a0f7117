// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` entry and the small enums describing
//! how it is categorized and where it is shown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Generated ids combine the creation time with a process-wide counter, so
/// they never collide within one process. Callers may also supply their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Wraps a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new unique toast ID.
    #[must_use]
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "toast-{}-{}",
            Utc::now().timestamp_millis(),
            to_base36(seq)
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Category of a toast; determines the default icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Long-running operation, usually created with no auto-dismiss and
    /// later updated to a final category.
    Loading,
}

impl Category {
    /// Glyph shown when a toast carries no custom icon.
    #[must_use]
    pub fn default_glyph(self) -> &'static str {
        match self {
            Category::Success => "✓",
            Category::Error => "✕",
            Category::Warning => "⚠",
            Category::Info => "ℹ",
            Category::Loading => "⟳",
        }
    }
}

/// Screen slot a toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Every slot, in layout order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns true for slots anchored to the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Filled,
    Outlined,
    Minimal,
}

/// Action button attached to a toast.
#[derive(Clone)]
pub struct ToastAction {
    label: String,
    on_click: Rc<dyn Fn()>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Rc::new(on_click),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Callback fired once when a toast is purged after dismissal.
pub type CloseCallback = Box<dyn FnOnce()>;

/// One active toast.
///
/// `M` is the message payload. The manager stores it and hands it back to
/// the presentation layer without ever inspecting it.
pub struct Toast<M> {
    pub(crate) id: ToastId,
    pub(crate) message: M,
    pub(crate) category: Category,
    /// `Duration::ZERO` means the toast never auto-dismisses.
    pub(crate) duration: Duration,
    pub(crate) dismissible: bool,
    pub(crate) position: Position,
    pub(crate) variant: Variant,
    pub(crate) icon: Option<String>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) data: Option<Rc<dyn Any>>,
    pub(crate) on_close: Option<CloseCallback>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) visible: bool,
    pub(crate) removing: bool,
}

impl<M> Toast<M> {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &M {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the custom icon, or the category glyph if none was set.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.icon
            .as_deref()
            .unwrap_or_else(|| self.category.default_glyph())
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns the associated data if it is of type `T`.
    #[must_use]
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_deref().and_then(|data| data.downcast_ref())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether the exit sequence has begun.
    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.removing
    }
}

impl<M: fmt::Debug> fmt::Debug for Toast<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("category", &self.category)
            .field("duration", &self.duration)
            .field("dismissible", &self.dismissible)
            .field("position", &self.position)
            .field("variant", &self.variant)
            .field("icon", &self.icon)
            .field("action", &self.action)
            .field("has_data", &self.data.is_some())
            .field("has_on_close", &self.on_close.is_some())
            .field("created_at", &self.created_at)
            .field("visible", &self.visible)
            .field("removing", &self.removing)
            .finish()
    }
}
