// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::modal;
use crate::ui::notifications::{AnchorPosition, Category, NotificationMessage};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raise a sample toast of the given category.
    ShowToast(Category),
    /// Raise a toast that stays until dismissed.
    ShowStickyToast,
    ClearToasts,
    Toast(NotificationMessage),
    OpenCashOut,
    CloseCashOut,
    ConfirmCashOut,
    Modal(modal::Message),
    Tick(Instant), // Periodic tick for toast expiry and overlay animations
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CASINO_OVERLAYS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides `[toasts] max_toasts`.
    pub max_toasts: Option<usize>,
    /// Overrides `[toasts] position`.
    pub position: Option<AnchorPosition>,
}
