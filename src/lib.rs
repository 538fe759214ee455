// SPDX-License-Identifier: MPL-2.0
//! `casino_overlays` is the overlay layer of a casino-themed front end, built
//! with the Iced GUI framework.
//!
//! It provides a bounded toast notification queue with auto-dismiss timers,
//! and a modal dialog controller with a focus trap, a reference-counted
//! scroll lock and focus restoration. Both render into named portal layers
//! stacked above the page.
//!
//! # Quick start
//!
//! ```
//! use casino_overlays::ui::notifications::{ToastProvider, ToastSettings};
//! use casino_overlays::ui::portal::PortalRoot;
//!
//! let mut portal = PortalRoot::new();
//! let provider = ToastProvider::new(ToastSettings::default(), &mut portal);
//! let toaster = provider.handle();
//!
//! toaster.success("Jackpot!").unwrap();
//! assert_eq!(provider.len(), 1);
//! ```

pub mod app;
pub mod error;
pub mod ui;
