// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the authoritative list of toasts and every timer
//! attached to them. It enforces the per-position capacity, runs the
//! expiry → removing → purged sequence and publishes the list after every
//! change.

use super::notification::{Category, Position, Toast, ToastId};
use super::options::ToastOptions;
use super::timer::{TimerKind, Timers};
use crate::config::{ToastConfig, EXIT_ANIMATION_DELAY_MS, TICK_INTERVAL_MS};
use iced::{time, Subscription};
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tokio::time::Instant;

/// Time a dismissed toast stays in the list for its exit animation.
pub const EXIT_ANIMATION_DELAY: Duration = Duration::from_millis(EXIT_ANIMATION_DELAY_MS);

/// Messages the presentation layer sends back to the manager.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Clear every toast at once.
    DismissAll,
    /// The action button of a toast was pressed.
    Action(ToastId),
    /// The pointer entered (`true`) or left (`false`) a toast.
    HoverChanged(ToastId, bool),
    /// The window gained (`true`) or lost (`false`) focus.
    FocusChanged(bool),
    /// Tick for firing due timers.
    Tick(std::time::Instant),
}

type Listener<M> = Box<dyn FnMut(&[Toast<M>], &ToastConfig)>;

/// Manages the toast list and its timers.
///
/// Commands never fail: an unknown or already-removing id is a no-op.
pub struct Manager<M> {
    config: ToastConfig,
    /// Buckets concatenated; newest first within a bucket.
    toasts: Vec<Toast<M>>,
    timers: Timers,
    hovered: HashSet<ToastId>,
    focus_lost: bool,
    listeners: Vec<Listener<M>>,
}

impl<M> Manager<M> {
    /// Creates an empty manager with a fixed configuration.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            toasts: Vec::new(),
            timers: Timers::new(),
            hovered: HashSet::new(),
            focus_lost: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called with the full list after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Toast<M>], &ToastConfig) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a toast and returns its ID.
    ///
    /// The toast goes to the front of its position bucket. If the bucket
    /// then exceeds `max_toasts`, its oldest entries are evicted: their
    /// timers are cancelled and their `on_close` is not called.
    ///
    /// Reusing the id of a live toast replaces it silently; reusing the id of
    /// a toast that is already leaving purges it first, firing its `on_close`.
    pub fn create(&mut self, message: M, mut options: ToastOptions) -> ToastId {
        let id = options.take_id().unwrap_or_else(ToastId::generate);
        match self.get(&id).map(|toast| toast.removing) {
            Some(true) => {
                self.purge(&id);
            }
            Some(false) => {
                self.remove_silently(&id);
                tracing::debug!("Replacing live toast {}", id);
            }
            None => {}
        }

        let toast = options.build(id.clone(), message, &self.config);
        let duration = toast.duration;
        tracing::debug!(
            "Created {:?} toast {} at {:?}",
            toast.category,
            id,
            toast.position
        );
        self.insert_front(toast);

        if !duration.is_zero() {
            self.schedule_expiry(&id, duration);
        }
        self.publish();
        id
    }

    /// Creates a success toast.
    pub fn success(&mut self, message: M, options: ToastOptions) -> ToastId {
        self.create(message, options.force_category(Category::Success))
    }

    /// Creates an error toast.
    pub fn error(&mut self, message: M, options: ToastOptions) -> ToastId {
        self.create(message, options.force_category(Category::Error))
    }

    /// Creates a warning toast.
    pub fn warning(&mut self, message: M, options: ToastOptions) -> ToastId {
        self.create(message, options.force_category(Category::Warning))
    }

    /// Creates an info toast.
    pub fn info(&mut self, message: M, options: ToastOptions) -> ToastId {
        self.create(message, options.force_category(Category::Info))
    }

    /// Creates a loading toast.
    pub fn loading(&mut self, message: M, options: ToastOptions) -> ToastId {
        self.create(message, options.force_category(Category::Loading))
    }

    /// Replaces the message of a live toast and merges the set options.
    ///
    /// An explicit duration restarts the expiry timer (`Duration::ZERO`
    /// disables it). Moving a toast to another position puts it at the front
    /// of that bucket, evicting as `create` does. A toast that is already
    /// leaving keeps its position and gets no new expiry timer.
    ///
    /// Returns `false` if no toast has this ID.
    pub fn update(&mut self, id: &ToastId, message: M, options: ToastOptions) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let restart_expiry = options.has_duration();
        let toast = &mut self.toasts[index];
        let previous_position = toast.position;
        toast.message = message;
        options.apply(toast);
        let duration = toast.duration;
        let removing = toast.removing;
        if removing {
            toast.position = previous_position;
        }

        if toast.position != previous_position {
            let toast = self.toasts.remove(index);
            self.insert_front(toast);
        }

        if restart_expiry {
            self.timers.cancel(id, TimerKind::Expiry);
            if !duration.is_zero() && !removing {
                self.schedule_expiry(id, duration);
            }
        }
        tracing::debug!("Updated toast {}", id);
        self.publish();
        true
    }

    /// Starts the exit sequence of a toast.
    ///
    /// The toast stays in the list flagged as removing and is purged after
    /// [`EXIT_ANIMATION_DELAY`], at which point its `on_close` fires.
    ///
    /// Returns `false` if the toast is unknown or already removing.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        let started = self.begin_exit(id, Instant::now());
        if started {
            self.publish();
        }
        started
    }

    /// Removes every toast immediately, firing each `on_close`.
    ///
    /// No exit animation is waited for, and toasts already removing are
    /// purged along with the rest.
    pub fn dismiss_all(&mut self) {
        let cancelled = self.timers.clear();
        self.hovered.clear();
        let toasts = std::mem::take(&mut self.toasts);
        tracing::debug!(
            "Dismissing all {} toasts, {} timers cancelled",
            toasts.len(),
            cancelled
        );

        for mut toast in toasts {
            if let Some(on_close) = toast.on_close.take() {
                run_isolated(&toast.id, "on_close", on_close);
            }
        }
        self.publish();
    }

    /// Fires every timer that is due now.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Fires every timer due at or before `now`, in deadline order.
    ///
    /// A purge scheduled by an expiry counts from the expiry deadline, so
    /// one late tick can both expire and purge a toast.
    pub fn tick_at(&mut self, now: Instant) {
        let mut changed = false;
        while let Some(due) = self.timers.pop_due(now) {
            changed |= match due.kind {
                TimerKind::Expiry => self.begin_exit(&due.id, due.deadline),
                TimerKind::Purge => self.purge(&due.id),
            };
        }
        if changed {
            self.publish();
        }
    }

    /// Pauses the expiry timer of a hovered toast.
    ///
    /// Only honoured when `pause_on_hover` is enabled. Returns `true` if the
    /// toast was not already hovered.
    pub fn pause(&mut self, id: &ToastId) -> bool {
        if !self.config.pause_on_hover || self.index_of(id).is_none() {
            return false;
        }
        if !self.hovered.insert(id.clone()) {
            return false;
        }
        if !self.focus_lost {
            self.timers.pause(id, TimerKind::Expiry, Instant::now());
        }
        true
    }

    /// Resumes a toast paused by [`pause`](Self::pause).
    pub fn resume(&mut self, id: &ToastId) -> bool {
        if !self.hovered.remove(id) {
            return false;
        }
        if !self.focus_lost {
            self.timers.resume(id, TimerKind::Expiry, Instant::now());
        }
        true
    }

    /// Pauses every expiry timer while the window is unfocused.
    ///
    /// Only honoured when `pause_on_focus_loss` is enabled.
    pub fn pause_all(&mut self) -> bool {
        if !self.config.pause_on_focus_loss || self.focus_lost {
            return false;
        }
        self.focus_lost = true;
        let now = Instant::now();
        for toast in &self.toasts {
            self.timers.pause(&toast.id, TimerKind::Expiry, now);
        }
        true
    }

    /// Resumes timers paused by [`pause_all`](Self::pause_all), except for
    /// toasts that are still hovered.
    pub fn resume_all(&mut self) -> bool {
        if !self.focus_lost {
            return false;
        }
        self.focus_lost = false;
        let now = Instant::now();
        for toast in &self.toasts {
            if !self.hovered.contains(&toast.id) {
                self.timers.resume(&toast.id, TimerKind::Expiry, now);
            }
        }
        true
    }

    /// Runs the action callback of a toast.
    ///
    /// Returns `false` if the toast is unknown or has no action.
    pub fn invoke_action(&mut self, id: &ToastId) -> bool {
        let Some(action) = self
            .get(id)
            .and_then(|toast| toast.action.clone())
        else {
            return false;
        };
        run_isolated(id, "action", || action.invoke());
        true
    }

    /// Handles a message from the presentation layer.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::DismissAll => self.dismiss_all(),
            Message::Action(id) => {
                self.invoke_action(id);
            }
            Message::HoverChanged(id, true) => {
                self.pause(id);
            }
            Message::HoverChanged(id, false) => {
                self.resume(id);
            }
            Message::FocusChanged(true) => {
                self.resume_all();
            }
            Message::FocusChanged(false) => {
                self.pause_all();
            }
            Message::Tick(_instant) => self.tick(),
        }
    }

    /// Periodic tick while toasts are present, for iced hosts.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the current toasts, bucket after bucket, newest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast<M>] {
        &self.toasts
    }

    /// Returns the toasts of one position, newest first.
    pub fn bucket(&self, position: Position) -> impl Iterator<Item = &Toast<M>> {
        self.toasts
            .iter()
            .filter(move |toast| toast.position == position)
    }

    /// Groups the toasts by non-empty position, in layout order.
    #[must_use]
    pub fn by_position(&self) -> Vec<(Position, Vec<&Toast<M>>)> {
        Position::ALL
            .into_iter()
            .map(|position| (position, self.bucket(position).collect::<Vec<_>>()))
            .filter(|(_, toasts)| !toasts.is_empty())
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast<M>> {
        self.toasts.iter().find(|toast| &toast.id == id)
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Returns the number of toasts, including those being removed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns whether there are any toasts.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Earliest pending deadline, for hosts that sleep until the next timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Time left before a toast auto-dismisses, if it has an expiry timer.
    #[must_use]
    pub fn remaining(&self, id: &ToastId) -> Option<Duration> {
        self.timers.remaining(id, TimerKind::Expiry, Instant::now())
    }

    /// Returns whether the expiry timer of a toast is paused.
    #[must_use]
    pub fn is_paused(&self, id: &ToastId) -> bool {
        self.timers.is_paused(id, TimerKind::Expiry)
    }

    fn index_of(&self, id: &ToastId) -> Option<usize> {
        self.toasts.iter().position(|toast| &toast.id == id)
    }

    /// Puts a toast at the front of its bucket and moves the bucket to the
    /// end of the list, evicting whatever exceeds the capacity.
    fn insert_front(&mut self, toast: Toast<M>) {
        let position = toast.position;
        let (mut bucket, others): (Vec<_>, Vec<_>) = std::mem::take(&mut self.toasts)
            .into_iter()
            .partition(|existing| existing.position == position);

        bucket.insert(0, toast);
        let max = self.config.max_toasts.value();
        let evicted = if bucket.len() > max {
            bucket.split_off(max)
        } else {
            Vec::new()
        };

        self.toasts = others;
        self.toasts.extend(bucket);

        for toast in evicted {
            self.timers.cancel_all(&toast.id);
            self.hovered.remove(&toast.id);
            tracing::debug!("Evicted toast {} from full {:?} bucket", toast.id, position);
        }
    }

    /// Drops a toast without animation or `on_close`.
    fn remove_silently(&mut self, id: &ToastId) {
        if let Some(index) = self.index_of(id) {
            self.toasts.remove(index);
            self.timers.cancel_all(id);
            self.hovered.remove(id);
        }
    }

    fn schedule_expiry(&mut self, id: &ToastId, duration: Duration) {
        if self.focus_lost || self.hovered.contains(id) {
            self.timers.schedule_paused(id, TimerKind::Expiry, duration);
        } else {
            self.timers
                .schedule(id, TimerKind::Expiry, duration, Instant::now());
        }
    }

    fn begin_exit(&mut self, id: &ToastId, at: Instant) -> bool {
        let Some(toast) = self
            .toasts
            .iter_mut()
            .find(|toast| &toast.id == id && !toast.removing)
        else {
            return false;
        };

        toast.removing = true;
        self.timers.cancel(id, TimerKind::Expiry);
        self.timers
            .schedule(id, TimerKind::Purge, EXIT_ANIMATION_DELAY, at);
        tracing::debug!("Toast {} is leaving", id);
        true
    }

    fn purge(&mut self, id: &ToastId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let mut toast = self.toasts.remove(index);
        self.timers.cancel_all(id);
        self.hovered.remove(id);
        tracing::debug!("Purged toast {}", id);

        if let Some(on_close) = toast.on_close.take() {
            run_isolated(id, "on_close", on_close);
        }
        true
    }

    fn publish(&mut self) {
        let toasts = self.toasts.as_slice();
        let config = &self.config;
        for listener in &mut self.listeners {
            if panic::catch_unwind(AssertUnwindSafe(|| listener(toasts, config))).is_err() {
                tracing::warn!("Toast listener panicked");
            }
        }
    }
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl<M: fmt::Debug> fmt::Debug for Manager<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("config", &self.config)
            .field("toasts", &self.toasts)
            .field("timers", &self.timers)
            .field("hovered", &self.hovered)
            .field("focus_lost", &self.focus_lost)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Runs a caller-supplied callback, containing any panic it raises.
fn run_isolated(id: &ToastId, kind: &str, callback: impl FnOnce()) {
    if panic::catch_unwind(AssertUnwindSafe(callback)).is_err() {
        tracing::error!("The {} callback of toast {} panicked", kind, id);
    }
}
