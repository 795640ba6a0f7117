// SPDX-License-Identifier: MPL-2.0
//! Cancellable per-toast timers.
//!
//! `Timers` owns every pending deadline of a manager. A toast has at most
//! one timer of each [`TimerKind`]; scheduling a kind again replaces the
//! previous timer of that kind. Nothing fires on its own: the owner polls
//! [`Timers::pop_due`] from its tick handler.
//!
//! Deadlines are `tokio::time::Instant`, so tests can drive them with a
//! paused tokio clock.

use super::notification::ToastId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// The two timers a toast can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Auto-dismiss after the toast's duration.
    Expiry,
    /// Final removal after the exit animation.
    Purge,
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due {
    pub id: ToastId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Armed { deadline: Instant },
    Paused { remaining: Duration },
}

#[derive(Debug)]
struct Slot {
    /// Scheduling order, used to break deadline ties.
    seq: u64,
    state: State,
}

/// Registry of pending timers, keyed by toast and timer kind.
#[derive(Debug, Default)]
pub struct Timers {
    next_seq: u64,
    slots: HashMap<(ToastId, TimerKind), Slot>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer firing `delay` after `now`, replacing any timer of the
    /// same kind for this toast.
    ///
    /// A delay too large to express as a deadline leaves the timer frozen,
    /// so it never fires.
    pub fn schedule(&mut self, id: &ToastId, kind: TimerKind, delay: Duration, now: Instant) {
        let state = match now.checked_add(delay) {
            Some(deadline) => State::Armed { deadline },
            None => {
                tracing::debug!("Timer delay {:?} for toast {} is out of range", delay, id);
                State::Paused { remaining: delay }
            }
        };
        self.insert(id, kind, state);
    }

    /// Registers a timer that stays frozen with `delay` remaining until
    /// [`resume`](Self::resume) is called.
    pub fn schedule_paused(&mut self, id: &ToastId, kind: TimerKind, delay: Duration) {
        self.insert(id, kind, State::Paused { remaining: delay });
    }

    fn insert(&mut self, id: &ToastId, kind: TimerKind, state: State) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.insert((id.clone(), kind), Slot { seq, state });
    }

    /// Cancels the timer of `kind` for this toast.
    ///
    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self, id: &ToastId, kind: TimerKind) -> bool {
        self.slots.remove(&(id.clone(), kind)).is_some()
    }

    /// Cancels every timer of this toast, returning how many were pending.
    pub fn cancel_all(&mut self, id: &ToastId) -> usize {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _), _| slot_id != id);
        before - self.slots.len()
    }

    /// Cancels every timer, returning how many were pending.
    pub fn clear(&mut self) -> usize {
        let count = self.slots.len();
        self.slots.clear();
        count
    }

    #[must_use]
    pub fn is_pending(&self, id: &ToastId, kind: TimerKind) -> bool {
        self.slots.contains_key(&(id.clone(), kind))
    }

    #[must_use]
    pub fn is_paused(&self, id: &ToastId, kind: TimerKind) -> bool {
        matches!(
            self.slots.get(&(id.clone(), kind)),
            Some(Slot {
                state: State::Paused { .. },
                ..
            })
        )
    }

    /// Time left before the timer fires, or `None` if nothing is pending.
    #[must_use]
    pub fn remaining(&self, id: &ToastId, kind: TimerKind, now: Instant) -> Option<Duration> {
        self.slots
            .get(&(id.clone(), kind))
            .map(|slot| match slot.state {
                State::Armed { deadline } => deadline.saturating_duration_since(now),
                State::Paused { remaining } => remaining,
            })
    }

    /// Freezes an armed timer, keeping the time it had left.
    ///
    /// Returns `true` if the timer was armed.
    pub fn pause(&mut self, id: &ToastId, kind: TimerKind, now: Instant) -> bool {
        match self.slots.get_mut(&(id.clone(), kind)) {
            Some(slot) => match slot.state {
                State::Armed { deadline } => {
                    slot.state = State::Paused {
                        remaining: deadline.saturating_duration_since(now),
                    };
                    true
                }
                State::Paused { .. } => false,
            },
            None => false,
        }
    }

    /// Re-arms a paused timer with its remaining time counted from `now`.
    ///
    /// Returns `true` if the timer was re-armed. A timer whose remaining time
    /// does not fit a deadline stays frozen.
    pub fn resume(&mut self, id: &ToastId, kind: TimerKind, now: Instant) -> bool {
        let Some(slot) = self.slots.get_mut(&(id.clone(), kind)) else {
            return false;
        };
        let State::Paused { remaining } = slot.state else {
            return false;
        };
        match now.checked_add(remaining) {
            Some(deadline) => {
                slot.state = State::Armed { deadline };
                true
            }
            None => false,
        }
    }

    /// Earliest deadline among armed timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .values()
            .filter_map(|slot| match slot.state {
                State::Armed { deadline } => Some(deadline),
                State::Paused { .. } => None,
            })
            .min()
    }

    /// Removes and returns the earliest armed timer whose deadline is at or
    /// before `now`. Timers with equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Due> {
        let (deadline, key) = self
            .slots
            .iter()
            .filter_map(|(key, slot)| match slot.state {
                State::Armed { deadline } if deadline <= now => Some((deadline, slot.seq, key)),
                _ => None,
            })
            .min_by_key(|(deadline, seq, _)| (*deadline, *seq))
            .map(|(deadline, _, key)| (deadline, key.clone()))?;

        self.slots.remove(&key);
        let (id, kind) = key;
        Some(Due { id, kind, deadline })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
