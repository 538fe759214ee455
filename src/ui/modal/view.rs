// SPDX-License-Identifier: MPL-2.0
//! Dialog rendering.
//!
//! A visible dialog renders as one overlay layer: a full-window backdrop that
//! reports presses on itself, and the dialog panel centered above it. The
//! panel is wrapped in `opaque`, so presses on the content never reach the
//! backdrop.

use super::controller::{Message, ModalController};
use super::focus::FocusHost;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, stack, text, Column, Row, Space};
use iced::{alignment, Element, Length, Padding, Theme};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Width preset of a dialog panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl ModalSize {
    #[must_use]
    pub fn width(self) -> Length {
        match self {
            Self::Sm => Length::Fixed(sizing::DIALOG_SM),
            Self::Md => Length::Fixed(sizing::DIALOG_MD),
            Self::Lg => Length::Fixed(sizing::DIALOG_LG),
            Self::Full => Length::Fill,
        }
    }
}

/// Caller-facing configuration of one dialog.
///
/// The same props are passed to [`ModalController::sync`], which opens and
/// closes the session from `is_open`, to [`ModalController::update`], which
/// answers close requests with `on_close`, and to [`view`].
#[derive(Debug, Clone)]
pub struct ModalProps<'a, M> {
    /// Drives the dialog session through [`ModalController::sync`].
    pub is_open: bool,
    /// Emitted for every close request (Escape, backdrop, close button).
    pub on_close: M,
    /// Wraps dialog input so the caller can route it back to its controller.
    pub on_event: fn(Message) -> M,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub size: ModalSize,
    pub show_close_button: bool,
}

impl<'a, M> ModalProps<'a, M> {
    #[must_use]
    pub fn new(is_open: bool, on_close: M, on_event: fn(Message) -> M) -> Self {
        Self {
            is_open,
            on_close,
            on_event,
            title: None,
            description: None,
            size: ModalSize::default(),
            show_close_button: true,
        }
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }
}

/// Renders the dialog layer, or `None` once the dialog has fully closed.
///
/// `props` must be the ones last passed to [`ModalController::sync`].
pub fn view<'a, M, H>(
    controller: &ModalController,
    props: &ModalProps<'a, M>,
    host: &H,
    content: Element<'a, M>,
    now: Instant,
) -> Option<Element<'a, M>>
where
    M: Clone + 'a,
    H: FocusHost,
{
    if !controller.is_visible() {
        return None;
    }

    let alpha = controller.presence(now);
    let on_event = props.on_event;

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::modal::backdrop(alpha)),
    )
    .on_press(on_event(Message::BackdropPressed));

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let Some(title) = props.title {
        header = header.push(
            text(title)
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        );
    } else {
        header = header.push(Space::new().width(Length::Fill));
    }
    if props.show_close_button {
        let focused = host.active_element() == Some(&controller.close_button());
        header = header.push(
            button(text("✕").size(typography::BODY))
                .padding(spacing::XXS)
                .style(styles::button::close(focused))
                .on_press(on_event(Message::CloseButtonPressed)),
        );
    }

    let mut body = Column::new().spacing(spacing::MD).push(header);
    if let Some(description) = props.description {
        body = body.push(text(description).size(typography::BODY));
    }
    body = body.push(content);

    let panel = container(body)
        .width(props.size.width())
        .padding(spacing::LG)
        .style(move |theme: &Theme| styles::modal::dialog(theme, alpha));

    // Rise into place while fading in.
    let offset = (1.0 - alpha) * sizing::TOAST_SLIDE;
    let panel = container(panel).padding(Padding {
        top: offset,
        ..Padding::ZERO
    });

    let dialog = center(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill);

    Some(stack![backdrop, dialog].into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::focus::FocusTree;
    use crate::ui::modal::scroll_lock::ScrollLock;

    #[derive(Debug, Clone)]
    enum Outer {
        Close,
        Modal(Message),
    }

    #[test]
    fn props_default_to_medium_with_close_button() {
        let props = ModalProps::new(true, Outer::Close, Outer::Modal);
        assert_eq!(props.size, ModalSize::Md);
        assert!(props.show_close_button);
        assert!(props.title.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let props = ModalProps::new(false, Outer::Close, Outer::Modal)
            .title("Cash out")
            .description("Withdraw your balance")
            .size(ModalSize::Lg)
            .show_close_button(false);

        assert_eq!(props.title, Some("Cash out"));
        assert_eq!(props.description, Some("Withdraw your balance"));
        assert_eq!(props.size, ModalSize::Lg);
        assert!(!props.show_close_button);
        assert!(matches!(
            (props.on_event)(Message::BackdropPressed),
            Outer::Modal(Message::BackdropPressed)
        ));
    }

    #[test]
    fn sizes_widen_monotonically() {
        assert_eq!(ModalSize::Sm.width(), Length::Fixed(sizing::DIALOG_SM));
        assert_eq!(ModalSize::Full.width(), Length::Fill);
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let controller = ModalController::new("dialog", ScrollLock::new());
        let props = ModalProps::new(false, Outer::Close, Outer::Modal);
        let host = FocusTree::new();

        let layer = view(&controller, &props, &host, Space::new().into(), Instant::now());
        assert!(layer.is_none());
    }

    #[test]
    fn open_dialog_renders_a_layer() {
        let mut controller = ModalController::new("dialog", ScrollLock::new());
        let mut host = FocusTree::new();
        let props = ModalProps::new(true, Outer::Close, Outer::Modal).title("Cash out");
        controller.sync(&props, &mut host, Instant::now());

        let layer = view(&controller, &props, &host, Space::new().into(), Instant::now());
        assert!(layer.is_some());
    }
}
