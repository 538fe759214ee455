// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! # Overlays
//!
//! - [`notifications`] - Toast queue, renderer and the `Toaster` facade
//! - [`modal`] - Dialog controller, focus tree and scroll lock
//! - [`portal`] - Named overlay layers stacked above the page
//!
//! # Shared Infrastructure
//!
//! - [`motion`] - Time-based transitions and easing
//! - [`widgets`] - Custom Iced widgets (scroll gate)
//! - [`styles`] - Centralized styling (buttons, containers, toasts, dialogs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod modal;
pub mod motion;
pub mod notifications;
pub mod portal;
pub mod styles;
pub mod widgets;
