// SPDX-License-Identifier: MPL-2.0
//! Toast card styles.

use super::fade;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Toast card with a category accent border, faded by `alpha`.
pub fn card(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
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
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Borderless dismiss control, faded by `alpha`.
pub fn dismiss_button(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = fade(theme.extended_palette().background.base.text, alpha);
        let hover = |a: f32| {
            Some(Background::Color(fade(
                Color {
                    a,
                    ..palette::GRAY_400
                },
                alpha,
            )))
        };

        let (background, text_color) = match status {
            button::Status::Active => (None, text),
            button::Status::Hovered => (hover(opacity::OVERLAY_SUBTLE), text),
            button::Status::Pressed => (hover(opacity::OVERLAY_MEDIUM), text),
            button::Status::Disabled => (None, fade(text, opacity::OVERLAY_MEDIUM)),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = card(&Theme::Dark, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn card_fades_with_presence() {
        let style = card(&Theme::Dark, palette::ERROR_500, 0.0);
        assert_eq!(style.border.color.a, 0.0);
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let style = dismiss_button(1.0);
        assert!(style(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(style(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
