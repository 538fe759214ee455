// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record and the
//! `Category` enum used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers come from a per-queue counter and are never reused by that
/// queue, live or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Presentational category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Default,
    Success,
    Error,
    Info,
    Warning,
}

impl Category {
    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Default => palette::NEUTRAL_500,
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Info => palette::INFO_500,
            Category::Warning => palette::WARNING_500,
        }
    }

    /// Returns the glyph shown before the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Default => "•",
            Category::Success => "✓",
            Category::Error => "✕",
            Category::Info => "i",
            Category::Warning => "!",
        }
    }
}

/// A notification record. Records are never mutated once created; the queue
/// only adds and removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    category: Category,
    message: String,
    /// Zero means the record persists until dismissed.
    ttl: Duration,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: impl Into<String>,
        category: Category,
        ttl: Duration,
    ) -> Self {
        Self {
            id,
            category,
            message: message.into(),
            ttl,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns whether this notification stays until explicitly dismissed.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.ttl.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ttl_means_persistent() {
        let sticky = Notification::new(
            NotificationId::from_raw(1),
            "Jackpot!",
            Category::Success,
            Duration::ZERO,
        );
        let timed = Notification::new(
            NotificationId::from_raw(2),
            "Spin ready",
            Category::Info,
            Duration::from_secs(3),
        );

        assert!(sticky.is_persistent());
        assert!(!timed.is_persistent());
    }

    #[test]
    fn category_defaults_to_default() {
        assert_eq!(Category::default(), Category::Default);
    }

    #[test]
    fn category_glyphs_are_distinct() {
        let glyphs = [
            Category::Default.glyph(),
            Category::Success.glyph(),
            Category::Error.glyph(),
            Category::Info.glyph(),
            Category::Warning.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            assert!(!glyphs[i + 1..].contains(a));
        }
    }

    #[test]
    fn id_display_is_prefixed() {
        assert_eq!(NotificationId::from_raw(7).to_string(), "toast-7");
    }
}
