// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `ToastQueue` owns the ordered set of live notifications, their
//! auto-dismiss timers and the capacity bound. It is time-agnostic: callers
//! pass the current instant in, which keeps expiry deterministic in tests.

use super::notification::{Category, Notification, NotificationId};
use super::timer::{TimerToken, Timers};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    timer: Option<TimerToken>,
}

/// Bounded, insertion-ordered collection of live notifications.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    /// Live notifications, oldest first.
    entries: VecDeque<Entry>,
    timers: Timers<NotificationId>,
    capacity: usize,
    next_id: u64,
    /// Bumped once per observable mutation.
    revision: u64,
}

impl ToastQueue {
    /// Creates an empty queue holding at most `capacity` notifications.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            timers: Timers::new(),
            capacity: capacity.max(1),
            next_id: 0,
            revision: 0,
        }
    }

    /// Appends a notification and schedules its expiry.
    ///
    /// Blank messages are ignored and yield `None`. When the append pushes the
    /// queue over capacity, the oldest notifications are evicted and their
    /// timers cancelled.
    pub fn push(
        &mut self,
        message: &str,
        category: Category,
        ttl: Duration,
        now: Instant,
    ) -> Option<NotificationId> {
        if message.trim().is_empty() {
            log::trace!("ignoring blank toast message");
            return None;
        }

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let timer = (!ttl.is_zero()).then(|| self.timers.schedule(id, now + ttl));
        self.entries.push_back(Entry {
            notification: Notification::new(id, message, category, ttl),
            timer,
        });

        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                if let Some(token) = evicted.timer {
                    self.timers.cancel(token);
                }
                log::debug!(
                    "evicted {} to respect capacity {}",
                    evicted.notification.id(),
                    self.capacity
                );
            }
        }

        self.revision += 1;
        log::debug!("showing {id} ({category:?}, ttl {ttl:?})");
        Some(id)
    }

    /// Removes a notification by its ID, cancelling its timer.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.notification.id() == id) else {
            log::trace!("remove of absent {id} ignored");
            return false;
        };

        if let Some(entry) = self.entries.remove(pos) {
            if let Some(token) = entry.timer {
                self.timers.cancel(token);
            }
        }
        self.revision += 1;
        true
    }

    /// Cancels every timer and empties the queue in a single mutation.
    ///
    /// Returns the number of notifications removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.timers.cancel_all();
        if removed > 0 {
            self.entries.clear();
            self.revision += 1;
        }
        removed
    }

    /// Fires due timers, removing notifications whose time-to-live elapsed.
    ///
    /// Returns the IDs that expired.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        for id in self.timers.drain_due(now) {
            // A record removed through another path is simply skipped.
            if let Some(pos) = self.entries.iter().position(|e| e.notification.id() == id) {
                self.entries.remove(pos);
                log::debug!("{id} expired");
                expired.push(id);
            }
        }

        if !expired.is_empty() {
            self.revision += 1;
        }
        expired
    }

    /// Returns the live notifications in display order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Monotonic counter that changes whenever the visible set changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of auto-dismiss timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest instant at which a notification will expire.
    #[must_use]
    pub fn next_expiry(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_MAX_TOASTS)
    }
}
