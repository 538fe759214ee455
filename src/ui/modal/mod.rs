// SPDX-License-Identifier: MPL-2.0
//! Modal dialog subsystem.
//!
//! - [`focus`] - focus tree and the [`FocusHost`] seam the controller uses
//! - [`scroll_lock`] - reference-counted page scroll lock
//! - [`controller`] - session state machine, focus trap and close routing
//! - [`view`] - backdrop and dialog panel rendering
//!
//! The calling screen owns the dialog's [`ModalProps`] and syncs the
//! controller with them after every update:
//!
//! ```
//! use casino_overlays::ui::modal::{
//!     ElementId, Focusability, FocusTree, Message, ModalController, ModalProps, ScrollLock,
//! };
//! use std::time::Instant;
//!
//! #[derive(Debug, Clone)]
//! enum Screen {
//!     Close,
//!     Dialog(Message),
//! }
//!
//! let mut tree = FocusTree::new();
//! tree.insert(None, "dialog", Focusability::Programmatic);
//! tree.insert(Some(&ElementId::new("dialog")), "confirm", Focusability::Tabbable);
//!
//! let lock = ScrollLock::new();
//! let mut modal = ModalController::new("dialog", lock.clone());
//! let props = ModalProps::new(true, Screen::Close, Screen::Dialog);
//! modal.sync(&props, &mut tree, Instant::now());
//!
//! assert!(lock.is_locked());
//! assert!(tree.is_focused(&ElementId::new("confirm")));
//! ```

pub mod controller;
pub mod focus;
pub mod scroll_lock;
pub mod view;

pub use controller::{Message, ModalController, Phase};
pub use focus::{ElementId, FocusHost, FocusTree, Focusability};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use view::{view, ModalProps, ModalSize};
