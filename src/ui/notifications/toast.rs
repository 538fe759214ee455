// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! The `ToastRenderer` mirrors the live queue into a list of animated slots.
//! Slots are keyed by notification ID, so a removal only starts an exit
//! transition on the removed slot and never restarts its siblings. Removed
//! notifications linger as leaving slots until their exit completes.

use super::facade::Message;
use super::notification::{Category, Notification, NotificationId};
use super::queue::ToastQueue;
use crate::app::config::{TOAST_ENTER_MS, TOAST_EXIT_MS};
use crate::error::Error;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion::{Easing, Transition};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Screen anchor the toast stack is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPosition {
    TopCenter,
    TopRight,
    #[default]
    BottomCenter,
    BottomRight,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 4] = [
        AnchorPosition::TopCenter,
        AnchorPosition::TopRight,
        AnchorPosition::BottomCenter,
        AnchorPosition::BottomRight,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorPosition::TopCenter => "top-center",
            AnchorPosition::TopRight => "top-right",
            AnchorPosition::BottomCenter => "bottom-center",
            AnchorPosition::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> alignment::Horizontal {
        match self {
            AnchorPosition::TopCenter | AnchorPosition::BottomCenter => {
                alignment::Horizontal::Center
            }
            AnchorPosition::TopRight | AnchorPosition::BottomRight => alignment::Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(&self) -> alignment::Vertical {
        if self.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, AnchorPosition::TopCenter | AnchorPosition::TopRight)
    }
}

impl FromStr for AnchorPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AnchorPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::Config(format!("invalid toast position: {s}")))
    }
}

#[derive(Debug, Clone)]
struct Slot {
    notification: Notification,
    entering: Transition,
    leaving: Option<Transition>,
}

/// Snapshot of one toast at a given instant, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastFrame {
    pub id: NotificationId,
    pub message: String,
    pub category: Category,
    /// Visibility in `0.0..=1.0`, eased.
    pub presence: f32,
    pub leaving: bool,
}

/// Projects a [`ToastQueue`] onto the screen at one anchor.
#[derive(Debug, Clone)]
pub struct ToastRenderer {
    position: AnchorPosition,
    slots: Vec<Slot>,
    seen_revision: Option<u64>,
    enter: Duration,
    exit: Duration,
}

impl ToastRenderer {
    #[must_use]
    pub fn new(position: AnchorPosition) -> Self {
        Self {
            position,
            slots: Vec::new(),
            seen_revision: None,
            enter: Duration::from_millis(TOAST_ENTER_MS),
            exit: Duration::from_millis(TOAST_EXIT_MS),
        }
    }

    /// Overrides the entry and exit durations.
    #[must_use]
    pub fn with_durations(mut self, enter: Duration, exit: Duration) -> Self {
        self.enter = enter;
        self.exit = exit;
        self
    }

    #[must_use]
    pub fn position(&self) -> AnchorPosition {
        self.position
    }

    /// Reconciles the slots with the queue and drops finished exits.
    ///
    /// New notifications start entering at `now`; notifications no longer in
    /// the queue start leaving at `now`. Slots present on both sides are left
    /// untouched.
    pub fn sync(&mut self, queue: &ToastQueue, now: Instant) {
        if self.seen_revision != Some(queue.revision()) {
            for slot in &mut self.slots {
                if slot.leaving.is_none() && !queue.contains(slot.notification.id()) {
                    slot.leaving = Some(Transition::new(now, self.exit));
                }
            }

            for notification in queue.iter() {
                let known = self
                    .slots
                    .iter()
                    .any(|s| s.notification.id() == notification.id());
                if !known {
                    self.slots.push(Slot {
                        notification: notification.clone(),
                        entering: Transition::new(now, self.enter),
                        leaving: None,
                    });
                }
            }

            self.seen_revision = Some(queue.revision());
        }

        self.prune(now);
    }

    fn prune(&mut self, now: Instant) {
        self.slots
            .retain(|slot| slot.leaving.is_none_or(|leaving| !leaving.is_complete(now)));
    }

    /// Returns what to draw at `now`, in queue order.
    #[must_use]
    pub fn frames(&self, now: Instant) -> Vec<ToastFrame> {
        self.slots
            .iter()
            .map(|slot| {
                let shown = slot.entering.eased(now, Easing::ExponentialOut);
                let presence = match slot.leaving {
                    Some(leaving) => shown.min(1.0 - leaving.eased(now, Easing::ExponentialOut)),
                    None => shown,
                };

                ToastFrame {
                    id: slot.notification.id(),
                    message: slot.notification.message().to_string(),
                    category: slot.notification.category(),
                    presence,
                    leaving: slot.leaving.is_some(),
                }
            })
            .collect()
    }

    /// Returns the IDs of every slot, leaving ones included.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.slots.iter().map(|s| s.notification.id()).collect()
    }

    /// Returns whether any slot is still entering or leaving.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slots
            .iter()
            .any(|s| s.leaving.is_some() || !s.entering.is_complete(now))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Renders the toast stack at the configured anchor.
    pub fn view<'a>(&self, now: Instant) -> Element<'a, Message> {
        let from_top = self.position.is_top();
        let toasts: Vec<Element<'a, Message>> = self
            .frames(now)
            .into_iter()
            .map(|frame| toast_view(frame, from_top))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(self.position.horizontal());

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(self.position.horizontal())
            .align_y(self.position.vertical())
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast card.
fn toast_view<'a>(frame: ToastFrame, from_top: bool) -> Element<'a, Message> {
    let accent = frame.category.color();
    let alpha = frame.presence;

    let glyph = Text::new(frame.category.glyph())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(styles::fade(accent, alpha)),
        });

    let message = Text::new(frame.message)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(styles::fade(theme.palette().text, alpha)),
        });

    let mut dismiss = button(Text::new("✕").size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(styles::toast::dismiss_button(alpha));
    if !frame.leaving {
        dismiss = dismiss.on_press(Message::Dismiss(frame.id));
    }

    // Layout: [glyph] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::toast::card(theme, accent, alpha));

    // Slide toward the anchor edge while fading in.
    let offset = (1.0 - alpha) * sizing::TOAST_SLIDE;
    let slide = if from_top {
        Padding {
            top: 0.0,
            right: 0.0,
            bottom: offset,
            left: 0.0,
        }
    } else {
        Padding {
            top: offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    };

    container(card).padding(slide).into()
}
