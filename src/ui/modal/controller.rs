// SPDX-License-Identifier: MPL-2.0
//! Modal dialog session controller.
//!
//! The calling screen owns the dialog's [`ModalProps`]; the controller only
//! reacts to them. Each `sync` compares `props.is_open` with the current
//! session and, on an edge, engages or tears down the focus trap and scroll
//! lock. Close requests (Escape, backdrop, close button) are handed back to
//! the caller as `props.on_close`; the controller never flips `is_open`
//! itself.

use super::focus::{ElementId, FocusHost};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::view::ModalProps;
use crate::ui::motion::{Easing, Transition};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use std::time::{Duration, Instant};

/// Input routed to an open dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The backdrop itself was pressed (not the dialog content).
    BackdropPressed,
    CloseButtonPressed,
    KeyPressed { key: Key, modifiers: Modifiers },
}

impl Message {
    /// Converts a raw keyboard event into a dialog message.
    #[must_use]
    pub fn from_keyboard(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => Some(Self::KeyPressed {
                key: key.clone(),
                modifiers: *modifiers,
            }),
            _ => None,
        }
    }
}

/// Animation phase of the dialog surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening(Transition),
    Open,
    Closing(Transition),
}

/// Drives one dialog's focus trap, scroll lock and presence animation.
#[derive(Debug)]
pub struct ModalController {
    container: ElementId,
    lock: ScrollLock,
    phase: Phase,
    /// True between the open edge and the close edge of `is_open`.
    session: bool,
    prior_focus: Option<ElementId>,
    guard: Option<ScrollLockGuard>,
    animation: Duration,
    easing: Easing,
}

impl ModalController {
    /// Creates a controller for the dialog rooted at `container` in the focus
    /// tree.
    #[must_use]
    pub fn new(container: impl Into<ElementId>, lock: ScrollLock) -> Self {
        Self {
            container: container.into(),
            lock,
            phase: Phase::Closed,
            session: false,
            prior_focus: None,
            guard: None,
            animation: Duration::from_millis(crate::app::config::DEFAULT_MODAL_ANIMATION_MS),
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Duration) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn container(&self) -> &ElementId {
        &self.container
    }

    /// ID of the built-in close control inside the dialog.
    #[must_use]
    pub fn close_button(&self) -> ElementId {
        ElementId::from(format!("{}/close", self.container))
    }

    /// Returns whether a dialog session is active.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session
    }

    /// Returns whether the dialog surface should be drawn, including while it
    /// animates out.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Opening(_) | Phase::Closing(_))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Element that held focus when the current session opened.
    #[must_use]
    pub fn prior_focus(&self) -> Option<&ElementId> {
        self.prior_focus.as_ref()
    }

    /// Reconciles the session with `props.is_open`.
    pub fn sync<M, H: FocusHost>(
        &mut self,
        props: &ModalProps<'_, M>,
        host: &mut H,
        now: Instant,
    ) {
        match (self.session, props.is_open) {
            (false, true) => self.open(host, now),
            (true, false) => self.close(host, now),
            _ => {}
        }
    }

    fn open<H: FocusHost>(&mut self, host: &mut H, now: Instant) {
        self.session = true;
        self.prior_focus = host.active_element().cloned();
        self.guard = Some(self.lock.acquire());
        self.phase = Phase::Opening(Transition::new(now, self.animation));

        let focusables = host.focusables_within(&self.container);
        let focused = focusables.first().is_some_and(|first| host.focus(first))
            || host.focus(&self.container);
        if !focused {
            log::debug!(
                "dialog {} has nothing focusable; focus trap not engaged",
                self.container
            );
        }

        log::debug!("dialog {} opened", self.container);
    }

    fn close<H: FocusHost>(&mut self, host: &mut H, now: Instant) {
        self.session = false;
        self.guard = None;
        self.phase = Phase::Closing(Transition::new(now, self.animation));

        match self.prior_focus.take() {
            Some(prior) if host.is_attached(&prior) && host.focus(&prior) => {}
            _ => host.blur(),
        }

        log::debug!("dialog {} closed", self.container);
    }

    /// Settles finished transitions. Returns `true` if the phase changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let next = match self.phase {
            Phase::Opening(t) if t.is_complete(now) => Phase::Open,
            Phase::Closing(t) if t.is_complete(now) => Phase::Closed,
            _ => return false,
        };
        self.phase = next;
        true
    }

    /// Eased visibility of the dialog surface in `0.0..=1.0`.
    #[must_use]
    pub fn presence(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Closed => 0.0,
            Phase::Open => 1.0,
            Phase::Opening(t) => t.eased(now, self.easing),
            Phase::Closing(t) => 1.0 - t.eased(now, self.easing),
        }
    }

    /// Handles dialog input. Returns `props.on_close` when the input asks the
    /// dialog to close.
    pub fn update<M: Clone, H: FocusHost>(
        &self,
        message: Message,
        props: &ModalProps<'_, M>,
        host: &mut H,
    ) -> Option<M> {
        if !self.session || !props.is_open {
            return None;
        }

        match message {
            Message::BackdropPressed | Message::CloseButtonPressed => {
                Some(props.on_close.clone())
            }
            Message::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            } => Some(props.on_close.clone()),
            Message::KeyPressed {
                key: Key::Named(Named::Tab),
                modifiers,
            } => {
                self.cycle_focus(host, modifiers.shift());
                None
            }
            Message::KeyPressed { .. } => None,
        }
    }

    /// Moves focus to the next (or previous) focusable inside the dialog,
    /// wrapping at both ends.
    fn cycle_focus<H: FocusHost>(&self, host: &mut H, backwards: bool) {
        let focusables = host.focusables_within(&self.container);
        let len = focusables.len();
        if len == 0 {
            return;
        }

        let current = host
            .active_element()
            .and_then(|active| focusables.iter().position(|f| f == active));
        let next = match (current, backwards) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, false) => 0,
            (None, true) => len - 1,
        };

        host.focus(&focusables[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::focus::{Focusability, FocusTree};

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Close,
        Modal(Message),
    }

    const DIALOG: ElementId = ElementId::new("dialog");

    fn props(is_open: bool) -> ModalProps<'static, Outer> {
        ModalProps::new(is_open, Outer::Close, Outer::Modal)
    }

    fn page() -> FocusTree {
        let mut tree = FocusTree::new();
        let root = ElementId::new("root");
        tree.insert(None, root.clone(), Focusability::None);
        tree.insert(Some(&root), "open-cash-out", Focusability::Tabbable);
        tree.insert(Some(&root), DIALOG, Focusability::Programmatic);
        tree.insert(Some(&DIALOG), "close", Focusability::Tabbable);
        tree.insert(Some(&DIALOG), "confirm", Focusability::Tabbable);
        tree.insert(Some(&DIALOG), "cancel", Focusability::Tabbable);
        tree
    }

    fn tab(shift: bool) -> Message {
        Message::KeyPressed {
            key: Key::Named(Named::Tab),
            modifiers: if shift {
                Modifiers::SHIFT
            } else {
                Modifiers::empty()
            },
        }
    }

    fn escape() -> Message {
        Message::KeyPressed {
            key: Key::Named(Named::Escape),
            modifiers: Modifiers::empty(),
        }
    }

    fn opened(tree: &mut FocusTree, lock: &ScrollLock) -> ModalController {
        let mut modal = ModalController::new(DIALOG, lock.clone());
        tree.focus(&ElementId::new("open-cash-out"));
        modal.sync(&props(true), tree, Instant::now());
        modal
    }

    #[test]
    fn opening_focuses_first_focusable_and_locks_scroll() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        assert!(modal.is_open());
        assert!(lock.is_locked());
        assert!(tree.is_focused(&ElementId::new("close")));
        assert_eq!(modal.prior_focus(), Some(&ElementId::new("open-cash-out")));
    }

    #[test]
    fn tab_wraps_within_dialog() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        for _ in 0..3 {
            assert!(modal.update(tab(false), &props(true), &mut tree).is_none());
        }

        assert!(tree.is_focused(&ElementId::new("close")));
    }

    #[test]
    fn shift_tab_wraps_backwards() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        modal.update(tab(true), &props(true), &mut tree);

        assert!(tree.is_focused(&ElementId::new("cancel")));
    }

    #[test]
    fn tab_from_outside_enters_at_the_edges() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        tree.focus(&ElementId::new("open-cash-out"));
        modal.update(tab(false), &props(true), &mut tree);
        assert!(tree.is_focused(&ElementId::new("close")));

        tree.focus(&ElementId::new("open-cash-out"));
        modal.update(tab(true), &props(true), &mut tree);
        assert!(tree.is_focused(&ElementId::new("cancel")));
    }

    #[test]
    fn focusables_are_requeried_on_each_tab() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        tree.set_disabled(&ElementId::new("confirm"), true);
        modal.update(tab(false), &props(true), &mut tree);

        assert!(tree.is_focused(&ElementId::new("cancel")));
    }

    #[test]
    fn close_requests_return_the_callers_message() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        assert_eq!(modal.update(escape(), &props(true), &mut tree), Some(Outer::Close));
        assert_eq!(
            modal.update(Message::BackdropPressed, &props(true), &mut tree),
            Some(Outer::Close)
        );
        assert_eq!(
            modal.update(Message::CloseButtonPressed, &props(true), &mut tree),
            Some(Outer::Close)
        );
        // The controller never closes itself.
        assert!(modal.is_open());
    }

    #[test]
    fn open_and_close_follow_the_props() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(DIALOG, lock.clone());

        modal.sync(&props(false), &mut tree, Instant::now());
        assert!(!modal.is_open());
        assert!(!modal.is_visible());

        let open = props(true).title("Cash out");
        modal.sync(&open, &mut tree, Instant::now());
        assert!(modal.is_open());
        assert!(lock.is_locked());

        modal.sync(&props(false), &mut tree, Instant::now());
        assert!(!modal.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn input_is_ignored_once_props_say_closed() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let modal = opened(&mut tree, &lock);

        assert!(modal
            .update(Message::BackdropPressed, &props(false), &mut tree)
            .is_none());
        assert!(modal.update(escape(), &props(false), &mut tree).is_none());
    }

    #[test]
    fn closing_restores_focus_and_unlocks() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let mut modal = opened(&mut tree, &lock);

        modal.sync(&props(false), &mut tree, Instant::now());

        assert!(!modal.is_open());
        assert!(!lock.is_locked());
        assert!(tree.is_focused(&ElementId::new("open-cash-out")));
        assert!(modal.prior_focus().is_none());
    }

    #[test]
    fn detached_prior_focus_clears_focus() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let mut modal = opened(&mut tree, &lock);

        tree.remove(&ElementId::new("open-cash-out"));
        modal.sync(&props(false), &mut tree, Instant::now());

        assert!(tree.active_element().is_none());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut tree = page();
        let modal = ModalController::new(DIALOG, ScrollLock::new());
        tree.focus(&ElementId::new("open-cash-out"));

        assert!(modal.update(escape(), &props(true), &mut tree).is_none());
        modal.update(tab(false), &props(true), &mut tree);
        assert!(tree.is_focused(&ElementId::new("open-cash-out")));
    }

    #[test]
    fn empty_dialog_falls_back_to_container() {
        let mut tree = FocusTree::new();
        tree.insert(None, "trigger", Focusability::Tabbable);
        tree.insert(None, DIALOG, Focusability::Programmatic);
        tree.focus(&ElementId::new("trigger"));

        let mut modal = ModalController::new(DIALOG, ScrollLock::new());
        modal.sync(&props(true), &mut tree, Instant::now());

        assert!(tree.is_focused(&DIALOG));
    }

    #[test]
    fn degraded_path_leaves_focus_alone() {
        let mut tree = FocusTree::new();
        tree.insert(None, "trigger", Focusability::Tabbable);
        tree.focus(&ElementId::new("trigger"));

        let mut modal = ModalController::new("missing", ScrollLock::new());
        modal.sync(&props(true), &mut tree, Instant::now());

        assert!(modal.is_open());
        assert!(tree.is_focused(&ElementId::new("trigger")));
    }

    #[test]
    fn repeated_sync_is_idempotent() {
        let mut tree = page();
        let lock = ScrollLock::new();
        let mut modal = opened(&mut tree, &lock);

        tree.focus(&ElementId::new("confirm"));
        modal.sync(&props(true), &mut tree, Instant::now());

        assert_eq!(lock.holders(), 1);
        assert!(tree.is_focused(&ElementId::new("confirm")));
        assert_eq!(modal.prior_focus(), Some(&ElementId::new("open-cash-out")));
    }

    #[test]
    fn phases_follow_the_animation() {
        let mut tree = page();
        let start = Instant::now();
        let mut modal = ModalController::new(DIALOG, ScrollLock::new())
            .with_animation(Duration::from_millis(100));

        modal.sync(&props(true), &mut tree, start);
        assert!(matches!(modal.phase(), Phase::Opening(_)));
        assert!(modal.is_animating());
        assert!(!modal.advance(start + Duration::from_millis(50)));

        assert!(modal.advance(start + Duration::from_millis(100)));
        assert_eq!(modal.phase(), Phase::Open);
        assert_eq!(modal.presence(start), 1.0);

        let closed_at = start + Duration::from_millis(200);
        modal.sync(&props(false), &mut tree, closed_at);
        assert!(modal.is_visible());
        assert!(!modal.is_open());

        modal.advance(closed_at + Duration::from_millis(100));
        assert_eq!(modal.phase(), Phase::Closed);
        assert_eq!(modal.presence(closed_at), 0.0);
    }
}
