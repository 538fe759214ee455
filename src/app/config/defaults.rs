// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: queue capacity, lifetime and animation timings
//! - **Modal**: dialog animation timing
//! - **Runtime**: animation tick cadence

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum queue capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum queue capacity.
pub const MAX_MAX_TOASTS: usize = 20;

/// Default toast lifetime (in milliseconds).
pub const DEFAULT_TOAST_TTL_MS: u64 = 3000;

/// Toast entry animation (in milliseconds).
pub const TOAST_ENTER_MS: u64 = 200;

/// Toast exit animation (in milliseconds).
pub const TOAST_EXIT_MS: u64 = 200;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Default dialog open/close animation (in milliseconds).
pub const DEFAULT_MODAL_ANIMATION_MS: u64 = 180;

/// Maximum dialog animation (in milliseconds).
pub const MAX_MODAL_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Runtime
// ==========================================================================

/// Tick interval while overlays are animating or timers are pending.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_TOASTS > 0);
    assert!(MAX_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);

    assert!(DEFAULT_TOAST_TTL_MS > TOAST_ENTER_MS + TOAST_EXIT_MS);
    assert!(DEFAULT_MODAL_ANIMATION_MS <= MAX_MODAL_ANIMATION_MS);
    assert!(TICK_INTERVAL_MS > 0);
};
