// SPDX-License-Identifier: MPL-2.0
//! Container styles for the demo lobby.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Felt-green page background.
pub fn lobby(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::FELT_800)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Game tile surface in the lobby grid.
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        border: Border {
            color: palette::GOLD_600,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_is_translucent() {
        match tile(&Theme::Dark).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("tile must have a color background"),
        }
    }
}
