// SPDX-License-Identifier: MPL-2.0
//! Dialog and backdrop styles.

use super::fade;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Full-window dimming layer behind a dialog.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog panel surface.
pub fn dialog(theme: &Theme, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(fade(
            Color {
                a: opacity::SURFACE,
                ..base
            },
            alpha,
        ))),
        border: Border {
            color: fade(palette::GOLD_600, alpha),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: fade(shadow::LG.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::LG
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}
