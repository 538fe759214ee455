// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily at one screen anchor to report the
//! outcome of actions (deposit received, bet rejected, ...) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Immutable `Notification` record and its `Category`
//! - [`timer`] - Cancellable deadline timers and clocks
//! - [`queue`] - `ToastQueue`: bounded FIFO with auto-expiry
//! - [`toast`] - `ToastRenderer`: animated projection of the queue
//! - [`facade`] - `ToastProvider` (owner) and `Toaster` (handle for callers)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Category, ToastProvider, ToastSettings};
//!
//! // At the application root
//! let provider = ToastProvider::new(ToastSettings::default(), &mut portal);
//!
//! // Anywhere the handle was passed down
//! let toaster = provider.handle();
//! toaster.show_toast("Saved!", Category::Success, Duration::from_secs(3))?;
//!
//! // In the root view, stack the toast layer above the page
//! let layer = provider.view().map(|e| e.map(Message::Toast));
//! ```
//!
//! # Design Considerations
//!
//! - Default time-to-live 3s; zero keeps a toast until dismissed
//! - At most `max_toasts` visible (default 5); the oldest is evicted first
//! - Every removal path cancels the toast's timer

pub mod facade;
pub mod notification;
pub mod queue;
pub mod timer;
pub mod toast;

pub use facade::{
    Message as NotificationMessage, ToastProvider, ToastSettings, Toaster, TOAST_LAYER,
};
pub use notification::{Category, Notification, NotificationId};
pub use queue::ToastQueue;
pub use timer::{Clock, ManualClock, SystemClock, TimerToken, Timers};
pub use toast::{AnchorPosition, ToastFrame, ToastRenderer};
