// SPDX-License-Identifier: MPL-2.0
//! Demo application root.
//!
//! The `App` owns the overlay subsystem (portal root, toast provider, focus
//! tree, scroll lock and the cash-out dialog controller) and a stand-in lobby
//! page that exercises it. After every update the dialog controller is
//! synced with the `cash_out_open` flag, which only this module flips.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::error::Result;
use crate::ui::modal::{
    self, ElementId, FocusHost, FocusTree, Focusability, ModalController, ModalProps, ScrollLock,
};
use crate::ui::notifications::{Category, ToastProvider, ToastSettings, Toaster};
use crate::ui::portal::{PortalMount, PortalRoot};
use config::{Config, ModalConfig};
use iced::keyboard::{key::Named, Key};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};
use view::ids;

/// Portal layer for dialogs. Resolved before the toast layer so toasts stay
/// visible above an open dialog.
pub const DIALOG_LAYER: &str = "dialogs";

const STARTING_BALANCE_CENTS: u64 = 125_000;

/// Root Iced application state.
pub struct App {
    portal: PortalRoot,
    dialog_layer: PortalMount,
    toasts: ToastProvider,
    toaster: Toaster,
    focus: FocusTree,
    scroll_lock: ScrollLock,
    cash_out: ModalController,
    /// Owned here; the controller follows it through the dialog props.
    cash_out_open: bool,
    modal_config: ModalConfig,
    balance_cents: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("cash_out_open", &self.cash_out_open)
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_config(config, &flags, config_warning), Task::none())
    }

    /// Builds the application state from an already loaded configuration.
    pub fn from_config(mut config: Config, flags: &Flags, warning: Option<String>) -> Self {
        if let Some(max_toasts) = flags.max_toasts {
            config.toasts.max_toasts = Some(max_toasts);
        }
        if let Some(position) = flags.position {
            config.toasts.position = Some(position);
        }

        let mut portal = PortalRoot::new();
        let dialog_layer = portal.resolve(DIALOG_LAYER);
        let toasts = ToastProvider::new(ToastSettings::from_config(&config.toasts), &mut portal);
        let toaster = toasts.handle();

        let scroll_lock = ScrollLock::new();
        let cash_out = ModalController::new(ids::CASH_OUT, scroll_lock.clone())
            .with_animation(config.modal.animation());

        let app = Self {
            portal,
            dialog_layer,
            toasts,
            toaster,
            focus: view::lobby_focus_tree(),
            scroll_lock,
            cash_out,
            cash_out_open: false,
            modal_config: config.modal,
            balance_cents: STARTING_BALANCE_CENTS,
        };

        if let Some(key) = warning {
            app.report(
                app.toaster
                    .warning(&format!("Settings could not be read ({key}); using defaults")),
            );
        }

        app
    }

    fn title(&self) -> String {
        String::from("Casino Overlays")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let overlays_active = self.toasts.is_active() || self.cash_out.is_animating();

        Subscription::batch([
            subscription::create_event_subscription(self.cash_out.is_open()),
            subscription::create_tick_subscription(overlays_active),
        ])
    }

    /// Handles a message and re-syncs the dialog with `cash_out_open`.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message);
        self.sync_cash_out(Instant::now());
        Task::none()
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::ShowToast(category) => {
                let text = view::sample_message(category);
                let result = match category {
                    Category::Default => self.toaster.show(text),
                    Category::Success => self.toaster.success(text),
                    Category::Info => self.toaster.info(text),
                    Category::Warning => self.toaster.warning(text),
                    Category::Error => self.toaster.error(text),
                };
                self.report(result);
            }
            Message::ShowStickyToast => {
                self.report(self.toaster.show_toast(
                    "Verify your email to unlock withdrawals",
                    Category::Warning,
                    Duration::ZERO,
                ));
            }
            Message::ClearToasts => {
                self.report(self.toaster.clear_all_toasts());
            }
            Message::Toast(toast_message) => self.toasts.update(toast_message),
            Message::OpenCashOut => {
                // The trigger holds focus so it can be restored on close.
                self.focus.focus(&ids::OPEN_CASH_OUT);
                self.cash_out_open = true;
            }
            Message::CloseCashOut => self.cash_out_open = false,
            Message::ConfirmCashOut => {
                let amount = view::format_cents(self.balance_cents);
                self.balance_cents = 0;
                self.cash_out_open = false;
                self.report(self.toaster.success(&format!("Cash out of {amount} requested")));
            }
            Message::Modal(event) => {
                if let Some(next) = self.route_dialog_event(event) {
                    self.handle_message(next);
                }
            }
            Message::Tick(now) => {
                self.toasts.tick();
                self.cash_out.advance(now);
            }
        }
    }

    /// Enter activates the focused dialog control; everything else goes to
    /// the controller.
    fn route_dialog_event(&mut self, event: modal::Message) -> Option<Message> {
        if let modal::Message::KeyPressed {
            key: Key::Named(Named::Enter),
            ..
        } = &event
        {
            if !self.cash_out.is_open() {
                return None;
            }
            let active = self.focus.active_element()?;
            return if *active == ids::CONFIRM {
                (self.balance_cents > 0).then_some(Message::ConfirmCashOut)
            } else if *active == ids::CANCEL || *active == self.cash_out.close_button() {
                Some(Message::CloseCashOut)
            } else {
                None
            };
        }

        let props = self.cash_out_props();
        self.cash_out.update(event, &props, &mut self.focus)
    }

    /// Props of the cash-out dialog; `cash_out_open` drives `is_open`.
    fn cash_out_props(&self) -> ModalProps<'static, Message> {
        ModalProps::new(self.cash_out_open, Message::CloseCashOut, Message::Modal)
            .title("Cash out")
            .description("Withdraw your full balance to your linked account.")
            .size(self.modal_config.size())
            .show_close_button(self.modal_config.close_button())
    }

    /// Mounts the dialog's focus subtree on open, syncs the controller and
    /// unmounts the subtree once closed.
    fn sync_cash_out(&mut self, now: Instant) {
        let mounted = self.focus.is_attached(&ids::CASH_OUT);
        if self.cash_out_open && !mounted {
            self.mount_cash_out();
        }

        let props = self.cash_out_props();
        self.cash_out.sync(&props, &mut self.focus, now);

        if !self.cash_out_open && mounted {
            self.focus.remove(&ids::CASH_OUT);
        }
    }

    fn mount_cash_out(&mut self) {
        let dialog: ElementId = ids::CASH_OUT;
        self.focus.insert(None, dialog.clone(), Focusability::Programmatic);
        if self.modal_config.close_button() {
            self.focus.insert(
                Some(&dialog),
                self.cash_out.close_button(),
                Focusability::Tabbable,
            );
        }
        self.focus.insert(Some(&dialog), ids::CANCEL, Focusability::Tabbable);
        self.focus.insert(Some(&dialog), ids::CONFIRM, Focusability::Tabbable);
    }

    fn report<T>(&self, result: Result<T>) {
        if let Err(err) = result {
            log::warn!("toast request failed: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let base = view::lobby(view::ViewContext {
            focus: &self.focus,
            balance_cents: self.balance_cents,
            scroll_locked: self.scroll_lock.is_locked(),
        });

        let props = self.cash_out_props();
        let dialog = modal::view(
            &self.cash_out,
            &props,
            &self.focus,
            view::cash_out_actions(&self.focus, self.balance_cents),
            now,
        );

        let toasts = self.toasts.view().map(|layer| layer.map(Message::Toast));

        self.portal.compose(
            base,
            vec![(self.dialog_layer, dialog), (self.toasts.mount(), toasts)],
        )
    }

    #[cfg(test)]
    fn toast_ids(&self) -> Vec<crate::ui::notifications::NotificationId> {
        self.toasts.snapshot().iter().map(|n| n.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{AnchorPosition, NotificationMessage};

    fn app() -> App {
        App::from_config(Config::default(), &Flags::default(), None)
    }

    fn key(named: Named) -> Message {
        Message::Modal(modal::Message::KeyPressed {
            key: Key::Named(named),
            modifiers: iced::keyboard::Modifiers::default(),
        })
    }

    #[test]
    fn starts_with_empty_overlays() {
        let app = app();
        assert!(app.toasts.is_empty());
        assert!(!app.cash_out.is_open());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn config_warning_raises_a_toast() {
        let app = App::from_config(
            Config::default(),
            &Flags::default(),
            Some(config::LOAD_ERROR_WARNING.to_string()),
        );
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn cli_flags_override_config() {
        let flags = Flags {
            max_toasts: Some(2),
            position: Some(AnchorPosition::TopRight),
            ..Flags::default()
        };
        let mut app = App::from_config(Config::default(), &flags, None);
        for _ in 0..4 {
            let _ = app.update(Message::ShowToast(Category::Info));
        }

        assert_eq!(app.toasts.len(), 2);
        assert_eq!(app.toasts.position(), AnchorPosition::TopRight);
    }

    #[test]
    fn toast_buttons_raise_and_clear_toasts() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(Category::Success));
        let _ = app.update(Message::ShowStickyToast);
        assert_eq!(app.toasts.len(), 2);

        let _ = app.update(Message::ClearToasts);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn dismiss_message_removes_one_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(Category::Info));
        let _ = app.update(Message::ShowToast(Category::Error));
        let first = app.toast_ids()[0];

        let _ = app.update(Message::Toast(NotificationMessage::Dismiss(first)));

        assert_eq!(app.toasts.len(), 1);
        assert!(!app.toasts.contains(first));
    }

    #[test]
    fn opening_cash_out_traps_focus_and_locks_scroll() {
        let mut app = app();
        let _ = app.update(Message::OpenCashOut);

        assert!(app.cash_out.is_open());
        assert!(app.scroll_lock.is_locked());
        assert!(app.focus.is_focused(&app.cash_out.close_button()));
    }

    #[test]
    fn escape_closes_and_restores_focus() {
        let mut app = app();
        let _ = app.update(Message::OpenCashOut);
        let _ = app.update(key(Named::Escape));

        assert!(!app.cash_out_open);
        assert!(!app.cash_out.is_open());
        assert!(!app.scroll_lock.is_locked());
        assert!(app.focus.is_focused(&ids::OPEN_CASH_OUT));
        assert!(!app.focus.is_attached(&ids::CASH_OUT));
    }

    #[test]
    fn tab_cycles_inside_the_dialog() {
        let mut app = app();
        let _ = app.update(Message::OpenCashOut);

        for _ in 0..3 {
            let _ = app.update(key(Named::Tab));
        }

        assert!(app.focus.is_focused(&app.cash_out.close_button()));
    }

    #[test]
    fn enter_on_confirm_cashes_out() {
        let mut app = app();
        let _ = app.update(Message::OpenCashOut);
        let _ = app.update(key(Named::Tab));
        let _ = app.update(key(Named::Tab));
        assert!(app.focus.is_focused(&ids::CONFIRM));

        let _ = app.update(key(Named::Enter));

        assert_eq!(app.balance_cents, 0);
        assert!(!app.cash_out.is_open());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn backdrop_press_closes_the_dialog() {
        let mut app = app();
        let _ = app.update(Message::OpenCashOut);
        let _ = app.update(Message::Modal(modal::Message::BackdropPressed));

        assert!(!app.cash_out.is_open());
    }

    #[test]
    fn dialog_without_close_button_starts_on_cancel() {
        let mut config = Config::default();
        config.modal.show_close_button = Some(false);
        let mut app = App::from_config(config, &Flags::default(), None);

        let _ = app.update(Message::OpenCashOut);

        assert!(app.focus.is_focused(&ids::CANCEL));
    }
}
