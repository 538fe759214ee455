// SPDX-License-Identifier: MPL-2.0
//! Public entry points of the notification system.
//!
//! A [`ToastProvider`] is constructed once by the application root and owns
//! the queue, its renderer and the clock. Calling code never touches the
//! provider directly: it receives a cloneable [`Toaster`] handle and calls
//! `show_toast`, `remove_toast` or `clear_all_toasts` on it.
//!
//! A handle that was never connected to a provider, or whose provider has
//! been dropped, fails every call with [`Error::NotificationsUnavailable`].

use super::notification::{Category, Notification, NotificationId};
use super::queue::ToastQueue;
use super::timer::{Clock, SystemClock};
use super::toast::{AnchorPosition, ToastRenderer};
use crate::app::config::{
    ToastsConfig, DEFAULT_MAX_TOASTS, DEFAULT_TOAST_TTL_MS, MAX_MAX_TOASTS, MIN_MAX_TOASTS,
};
use crate::error::{Error, Result};
use crate::ui::portal::{PortalMount, PortalRoot};
use iced::Element;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Portal layer the toast stack renders into.
pub const TOAST_LAYER: &str = "toasts";

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Construction-time settings of a [`ToastProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub max_toasts: usize,
    pub position: AnchorPosition,
    pub default_ttl: Duration,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            position: AnchorPosition::default(),
            default_ttl: Duration::from_millis(DEFAULT_TOAST_TTL_MS),
        }
    }
}

impl ToastSettings {
    /// Resolves settings from the `[toasts]` config section, clamping
    /// out-of-range values.
    #[must_use]
    pub fn from_config(config: &ToastsConfig) -> Self {
        let defaults = Self::default();
        Self {
            max_toasts: config
                .max_toasts
                .unwrap_or(defaults.max_toasts)
                .clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS),
            position: config.position.unwrap_or(defaults.position),
            default_ttl: config
                .default_ttl_ms
                .map_or(defaults.default_ttl, Duration::from_millis),
        }
    }
}

struct Shared {
    queue: ToastQueue,
    renderer: ToastRenderer,
    clock: Box<dyn Clock>,
    default_ttl: Duration,
}

impl Shared {
    fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Lets the renderer observe the latest queue state.
    fn commit(&mut self) {
        let now = self.now();
        self.renderer.sync(&self.queue, now);
    }
}

/// Owner of the notification state for one application instance.
pub struct ToastProvider {
    shared: Rc<RefCell<Shared>>,
    mount: PortalMount,
}

impl ToastProvider {
    /// Creates a provider driven by the system clock.
    pub fn new(settings: ToastSettings, portal: &mut PortalRoot) -> Self {
        Self::with_clock(settings, portal, SystemClock)
    }

    /// Creates a provider driven by the given clock.
    pub fn with_clock(
        settings: ToastSettings,
        portal: &mut PortalRoot,
        clock: impl Clock + 'static,
    ) -> Self {
        let mount = portal.resolve(TOAST_LAYER);
        log::debug!(
            "toast provider started: max {} at {}",
            settings.max_toasts,
            settings.position.as_str()
        );

        Self {
            shared: Rc::new(RefCell::new(Shared {
                queue: ToastQueue::new(settings.max_toasts),
                renderer: ToastRenderer::new(settings.position),
                clock: Box::new(clock),
                default_ttl: settings.default_ttl,
            })),
            mount,
        }
    }

    /// Returns a handle calling code uses to raise and dismiss toasts.
    #[must_use]
    pub fn handle(&self) -> Toaster {
        Toaster {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Returns the portal layer this provider renders into.
    #[must_use]
    pub fn mount(&self) -> PortalMount {
        self.mount
    }

    #[must_use]
    pub fn position(&self) -> AnchorPosition {
        self.shared.borrow().renderer.position()
    }

    /// Handles a message emitted by the toast overlay.
    pub fn update(&mut self, message: Message) {
        let mut shared = self.shared.borrow_mut();
        match message {
            Message::Dismiss(id) => {
                shared.queue.remove(id);
            }
        }
        shared.commit();
    }

    /// Fires due expiry timers and advances animations.
    ///
    /// Returns the IDs that expired on this tick.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let mut shared = self.shared.borrow_mut();
        let now = shared.now();
        let expired = shared.queue.tick(now);
        shared.commit();
        expired
    }

    /// Returns whether the application needs to keep ticking: a toast is
    /// animating or an expiry timer is pending. Settled persistent toasts
    /// need no ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let shared = self.shared.borrow();
        shared.renderer.is_animating(shared.now()) || shared.queue.next_expiry().is_some()
    }

    /// Returns a copy of the live notifications in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.shared.borrow().queue.iter().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.shared.borrow().queue.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.borrow().queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.borrow().queue.is_empty()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.borrow().queue.revision()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.borrow().queue.pending_timers()
    }

    /// IDs currently drawn, including toasts still animating out.
    #[must_use]
    pub fn rendered_ids(&self) -> Vec<NotificationId> {
        self.shared.borrow().renderer.ids()
    }

    /// Renders the toast layer, or `None` when there is nothing to draw.
    pub fn view<'a>(&self) -> Option<Element<'a, Message>> {
        let shared = self.shared.borrow();
        if shared.renderer.is_empty() {
            return None;
        }
        Some(shared.renderer.view(shared.now()))
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            let dropped = shared.queue.clear();
            log::debug!("toast provider torn down ({dropped} toasts dropped)");
        }
    }
}

/// Cloneable handle to a [`ToastProvider`].
///
/// `Toaster::default()` is not connected to anything; every call on it
/// returns [`Error::NotificationsUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    shared: Weak<RefCell<Shared>>,
}

impl Toaster {
    /// Returns a handle that is not connected to any provider.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns whether the provider behind this handle is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.shared.strong_count() > 0
    }

    fn shared(&self) -> Result<Rc<RefCell<Shared>>> {
        self.shared.upgrade().ok_or_else(|| {
            log::error!("toast API used without an active ToastProvider");
            Error::NotificationsUnavailable
        })
    }

    /// Shows a toast. Blank messages are ignored and yield `Ok(None)`.
    pub fn show_toast(
        &self,
        message: &str,
        category: Category,
        ttl: Duration,
    ) -> Result<Option<NotificationId>> {
        let shared = self.shared()?;
        let mut shared = shared.borrow_mut();
        let now = shared.now();
        let id = shared.queue.push(message, category, ttl, now);
        shared.commit();
        Ok(id)
    }

    /// Shows a toast with the default category and time-to-live.
    pub fn show(&self, message: &str) -> Result<Option<NotificationId>> {
        self.show_with_default_ttl(message, Category::Default)
    }

    pub fn success(&self, message: &str) -> Result<Option<NotificationId>> {
        self.show_with_default_ttl(message, Category::Success)
    }

    pub fn info(&self, message: &str) -> Result<Option<NotificationId>> {
        self.show_with_default_ttl(message, Category::Info)
    }

    pub fn warning(&self, message: &str) -> Result<Option<NotificationId>> {
        self.show_with_default_ttl(message, Category::Warning)
    }

    pub fn error(&self, message: &str) -> Result<Option<NotificationId>> {
        self.show_with_default_ttl(message, Category::Error)
    }

    fn show_with_default_ttl(
        &self,
        message: &str,
        category: Category,
    ) -> Result<Option<NotificationId>> {
        let ttl = self.shared()?.borrow().default_ttl;
        self.show_toast(message, category, ttl)
    }

    /// Removes a toast. Unknown IDs are ignored.
    pub fn remove_toast(&self, id: NotificationId) -> Result<()> {
        let shared = self.shared()?;
        let mut shared = shared.borrow_mut();
        shared.queue.remove(id);
        shared.commit();
        Ok(())
    }

    /// Removes every toast and cancels all pending timers.
    pub fn clear_all_toasts(&self) -> Result<()> {
        let shared = self.shared()?;
        let mut shared = shared.borrow_mut();
        shared.queue.clear();
        shared.commit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::timer::ManualClock;

    fn provider(max_toasts: usize) -> (ToastProvider, ManualClock) {
        let clock = ManualClock::new();
        let settings = ToastSettings {
            max_toasts,
            ..ToastSettings::default()
        };
        let provider =
            ToastProvider::with_clock(settings, &mut PortalRoot::headless(), clock.clone());
        (provider, clock)
    }

    #[test]
    fn detached_handle_is_a_configuration_error() {
        let toaster = Toaster::detached();

        assert!(!toaster.is_connected());
        assert_eq!(toaster.show("hello"), Err(Error::NotificationsUnavailable));
        assert_eq!(
            toaster.clear_all_toasts(),
            Err(Error::NotificationsUnavailable)
        );
    }

    #[test]
    fn handle_fails_after_provider_teardown() {
        let (provider, _clock) = provider(5);
        let toaster = provider.handle();
        assert!(toaster.show("before").is_ok());

        drop(provider);

        assert!(!toaster.is_connected());
        assert_eq!(toaster.show("after"), Err(Error::NotificationsUnavailable));
    }

    #[test]
    fn default_ttl_comes_from_settings() {
        let clock = ManualClock::new();
        let settings = ToastSettings {
            default_ttl: Duration::from_millis(500),
            ..ToastSettings::default()
        };
        let mut provider =
            ToastProvider::with_clock(settings, &mut PortalRoot::headless(), clock.clone());
        let id = provider.handle().success("Deposit received").unwrap().unwrap();

        clock.advance(Duration::from_millis(501));
        assert_eq!(provider.tick(), vec![id]);
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let (mut provider, _clock) = provider(5);
        let id = provider.handle().show("Saved!").unwrap().unwrap();

        provider.update(Message::Dismiss(id));

        assert!(!provider.contains(id));
        assert_eq!(provider.pending_timers(), 0);
    }

    #[test]
    fn provider_stays_active_while_exit_animates() {
        let (mut provider, clock) = provider(5);
        let id = provider.handle().show("Saved!").unwrap().unwrap();

        provider.update(Message::Dismiss(id));
        assert!(provider.is_empty());
        assert!(provider.is_active());
        assert_eq!(provider.rendered_ids(), vec![id]);

        clock.advance(Duration::from_secs(1));
        provider.tick();
        assert!(!provider.is_active());
    }

    #[test]
    fn settled_persistent_toast_stops_ticking() {
        let (mut provider, clock) = provider(5);
        provider
            .handle()
            .show_toast("Verify your email", Category::Warning, Duration::ZERO)
            .unwrap();
        assert!(provider.is_active());

        clock.advance(Duration::from_secs(1));
        provider.tick();

        assert_eq!(provider.len(), 1);
        assert!(!provider.is_active());
    }

    #[test]
    fn pending_expiry_keeps_ticking_after_entry() {
        let (mut provider, clock) = provider(5);
        provider.handle().show("Saved!").unwrap();

        clock.advance(Duration::from_secs(1));
        provider.tick();

        assert!(provider.is_active());

        clock.advance(Duration::from_secs(5));
        provider.tick();
        assert!(provider.is_empty());
    }

    #[test]
    fn settings_from_config_clamps_capacity() {
        let config = ToastsConfig {
            max_toasts: Some(0),
            position: Some(AnchorPosition::TopRight),
            default_ttl_ms: Some(1200),
        };
        let settings = ToastSettings::from_config(&config);

        assert_eq!(settings.max_toasts, MIN_MAX_TOASTS);
        assert_eq!(settings.position, AnchorPosition::TopRight);
        assert_eq!(settings.default_ttl, Duration::from_millis(1200));
    }

    #[test]
    fn provider_resolves_its_portal_layer() {
        let mut portal = PortalRoot::new();
        let provider = ToastProvider::new(ToastSettings::default(), &mut portal);

        assert_eq!(provider.mount().name(), TOAST_LAYER);
        assert_eq!(portal.resolve(TOAST_LAYER), provider.mount());
    }
}
