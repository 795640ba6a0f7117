// SPDX-License-Identifier: MPL-2.0
//! Builder for toast creation and update options.
//!
//! The same builder serves both commands: on `create`, unset fields fall
//! back to the configured defaults; on `update`, unset fields leave the
//! existing entry untouched.

use super::notification::{
    Category, CloseCallback, Position, Toast, ToastAction, ToastId, Variant,
};
use crate::config::ToastConfig;
use chrono::Utc;
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Optional settings for a toast.
#[derive(Default)]
pub struct ToastOptions {
    id: Option<ToastId>,
    category: Option<Category>,
    duration: Option<Duration>,
    dismissible: Option<bool>,
    position: Option<Position>,
    variant: Option<Variant>,
    icon: Option<String>,
    action: Option<ToastAction>,
    data: Option<Rc<dyn Any>>,
    on_close: Option<CloseCallback>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-chosen identifier instead of a generated one.
    /// Ignored by `update`.
    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` disables it.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn data<T: Any>(mut self, data: T) -> Self {
        self.data = Some(Rc::new(data));
        self
    }

    #[must_use]
    pub fn on_close(mut self, on_close: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Returns whether a duration was explicitly set.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration.is_some()
    }

    pub(crate) fn force_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub(crate) fn take_id(&mut self) -> Option<ToastId> {
        self.id.take()
    }

    /// Builds a fresh entry, filling unset fields from `config`.
    pub(crate) fn build<M>(self, id: ToastId, message: M, config: &ToastConfig) -> Toast<M> {
        Toast {
            id,
            message,
            category: self.category.unwrap_or_default(),
            duration: self.duration.unwrap_or_else(|| config.default_duration()),
            dismissible: self.dismissible.unwrap_or(true),
            position: self.position.unwrap_or(config.default_position),
            variant: self.variant.unwrap_or(config.default_variant),
            icon: self.icon,
            action: self.action,
            data: self.data,
            on_close: self.on_close,
            created_at: Utc::now(),
            visible: true,
            removing: false,
        }
    }

    /// Overwrites the fields that were set; everything else is preserved.
    pub(crate) fn apply<M>(self, toast: &mut Toast<M>) {
        if let Some(category) = self.category {
            toast.category = category;
        }
        if let Some(duration) = self.duration {
            toast.duration = duration;
        }
        if let Some(dismissible) = self.dismissible {
            toast.dismissible = dismissible;
        }
        if let Some(position) = self.position {
            toast.position = position;
        }
        if let Some(variant) = self.variant {
            toast.variant = variant;
        }
        if self.icon.is_some() {
            toast.icon = self.icon;
        }
        if self.action.is_some() {
            toast.action = self.action;
        }
        if self.data.is_some() {
            toast.data = self.data;
        }
        if self.on_close.is_some() {
            toast.on_close = self.on_close;
        }
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("duration", &self.duration)
            .field("dismissible", &self.dismissible)
            .field("position", &self.position)
            .field("variant", &self.variant)
            .field("icon", &self.icon)
            .field("action", &self.action)
            .field("has_data", &self.data.is_some())
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_config_defaults_for_unset_fields() {
        let config = ToastConfig {
            default_duration_ms: 2500,
            default_position: Position::BottomLeft,
            default_variant: Variant::Minimal,
            ..ToastConfig::default()
        };
        let toast = ToastOptions::new().build(ToastId::new("a"), "hello", &config);

        assert_eq!(toast.duration(), Duration::from_millis(2500));
        assert_eq!(toast.position(), Position::BottomLeft);
        assert_eq!(toast.variant(), Variant::Minimal);
        assert_eq!(toast.category(), Category::Info);
        assert!(toast.dismissible());
        assert!(toast.is_visible());
        assert!(!toast.is_removing());
    }

    #[test]
    fn apply_preserves_omitted_fields() {
        let config = ToastConfig::default();
        let mut toast = ToastOptions::new()
            .category(Category::Loading)
            .icon("*")
            .dismissible(false)
            .build(ToastId::new("a"), "saving", &config);

        ToastOptions::new()
            .category(Category::Success)
            .apply(&mut toast);

        assert_eq!(toast.category(), Category::Success);
        assert_eq!(toast.icon(), "*");
        assert!(!toast.dismissible());
    }

    #[test]
    fn data_is_downcast_by_type() {
        let toast = ToastOptions::new()
            .data(42_u32)
            .build(ToastId::new("a"), (), &ToastConfig::default());

        assert_eq!(toast.data::<u32>(), Some(&42));
        assert!(toast.data::<String>().is_none());
    }

    #[test]
    fn forced_category_overrides_caller_choice() {
        let options = ToastOptions::new()
            .category(Category::Error)
            .force_category(Category::Success);
        let toast = options.build(ToastId::new("a"), (), &ToastConfig::default());
        assert_eq!(toast.category(), Category::Success);
    }
}
