// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the overlay layer and the demo lobby.

pub mod button;
pub mod container;
pub mod modal;
pub mod toast;

use iced::Color;

/// Scales a color's alpha by `alpha` (clamped to `0.0..=1.0`).
///
/// Used to fade overlay surfaces in and out with their presence.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
