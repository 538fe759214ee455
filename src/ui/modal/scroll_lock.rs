// SPDX-License-Identifier: MPL-2.0
//! Reference-counted page scroll lock.
//!
//! Each open dialog holds a [`ScrollLockGuard`]. The page stays locked while
//! any guard is alive, so nested or overlapping dialogs never unlock the page
//! early.

use std::cell::Cell;
use std::rc::Rc;

/// Shared lock counter for one page.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a hold on the lock. The page unlocks when every guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        if holders == 1 {
            log::debug!("page scroll locked");
        }
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    /// Returns whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// A single hold on a [`ScrollLock`], released on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            log::debug!("page scroll unlocked");
        }
    }
}
