// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadline timers and the clocks that drive them.
//!
//! Scheduling a timer returns a [`TimerToken`]; the owner stores the token
//! next to whatever the timer acts on and cancels it on every removal path.
//! Timers fire when the owner calls [`Timers::drain_due`] with the current
//! instant, which the application does on its periodic tick.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Moves the clock to `elapsed` after its origin. Never moves backwards.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed > self.elapsed.get() {
            self.elapsed.set(elapsed);
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed.get())
            .finish()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct Pending<K> {
    deadline: Instant,
    key: K,
}

/// A set of one-shot timers keyed by the value they act on.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    next_token: u64,
    pending: BTreeMap<TimerToken, Pending<K>>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            next_token: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<K: Copy> Timers<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire once `deadline` is reached.
    pub fn schedule(&mut self, key: K, deadline: Instant) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.insert(token, Pending { deadline, key });
        token
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        self.pending.remove(&token).is_some()
    }

    /// Cancels every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    /// Removes and returns the keys of all timers whose deadline is at or
    /// before `now`, earliest deadline first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(Instant, TimerToken)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(token, p)| (p.deadline, *token))
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|(_, token)| self.pending.remove(&token))
            .map(|p| p.key)
            .collect()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.contains_key(&token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
