// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use crate::ui::modal;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard input to the open dialog. Nothing is captured while
/// the dialog is closed.
pub fn create_event_subscription(dialog_open: bool) -> Subscription<Message> {
    if !dialog_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard_event) => {
            modal::Message::from_keyboard(&keyboard_event).map(Message::Modal)
        }
        _ => None,
    })
}

/// Creates the periodic tick that drives toast expiry and overlay animations.
pub fn create_tick_subscription(overlays_active: bool) -> Subscription<Message> {
    if overlays_active {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
