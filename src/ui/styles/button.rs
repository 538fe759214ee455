// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style takes a `focused` flag: focus is tracked by the overlay's
//! focus tree rather than by the widgets, so the ring is drawn from state.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn focus_ring(focused: bool, fallback: Color) -> (Color, f32) {
    if focused {
        (palette::GOLD_400, border::WIDTH_MD)
    } else {
        (fallback, border::WIDTH_SM)
    }
}

/// Primary action (gold).
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (color, width) = focus_ring(focused, palette::GOLD_600);
        let (background, shadow) = match status {
            button::Status::Hovered => (palette::GOLD_400, shadow::MD),
            button::Status::Disabled => (palette::GRAY_400, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (palette::GOLD_500, shadow::NONE),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: BLACK,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Secondary action (outlined, theme-aware).
pub fn secondary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let (color, width) = focus_ring(focused, palette::GRAY_400);
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background,
            text_color: if status == button::Status::Disabled {
                palette::GRAY_400
            } else {
                text
            },
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Icon-only close control in the dialog header.
pub fn close(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let (color, width) = focus_ring(focused, Color::TRANSPARENT);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                }))
            }
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background,
            text_color: theme.palette().text,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
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
    fn focused_buttons_draw_a_gold_ring() {
        let style = primary(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::GOLD_400);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn unfocused_close_button_has_no_ring() {
        let style = close(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
        assert!(style.background.is_none());
    }

    #[test]
    fn secondary_disabled_text_is_muted() {
        let style = secondary(false)(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
