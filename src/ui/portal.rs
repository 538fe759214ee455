// SPDX-License-Identifier: MPL-2.0
//! Overlay layers rendered above the page tree.
//!
//! A [`PortalRoot`] owns the named attachment points ([`PortalMount`]) that
//! overlay content renders into. Resolving a name twice returns the same
//! mount, so each layer exists at most once per root. Layers stack in the
//! order they were first resolved.
//!
//! A headless root resolves mounts normally but composes nothing on top of
//! the base view, which keeps overlay state testable without a window.

use iced::widget::Stack;
use iced::{Element, Length};

/// Where a [`PortalRoot`] sends its layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTarget {
    /// Layers are stacked above the base view in the application window.
    #[default]
    Window,
    /// Layers are dropped; only the base view is rendered.
    Headless,
}

/// A single named attachment point for overlay content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortalMount {
    name: &'static str,
    z_order: usize,
}

impl PortalMount {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stacking position; higher values render above lower ones.
    #[must_use]
    pub fn z_order(&self) -> usize {
        self.z_order
    }
}

/// Registry of overlay layers for one application window.
#[derive(Debug, Default)]
pub struct PortalRoot {
    mounts: Vec<PortalMount>,
    target: RenderTarget,
}

impl PortalRoot {
    /// Creates a root that stacks layers in the window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root whose layers render nowhere.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            mounts: Vec::new(),
            target: RenderTarget::Headless,
        }
    }

    #[must_use]
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Returns the mount registered under `name`, creating it on first use.
    pub fn resolve(&mut self, name: &'static str) -> PortalMount {
        if let Some(existing) = self.mounts.iter().find(|m| m.name == name) {
            return *existing;
        }

        let mount = PortalMount {
            name,
            z_order: self.mounts.len(),
        };
        log::debug!("portal layer '{name}' mounted at z={}", mount.z_order);
        self.mounts.push(mount);
        mount
    }

    /// Returns all mounts in stacking order.
    #[must_use]
    pub fn mounts(&self) -> &[PortalMount] {
        &self.mounts
    }

    /// Stacks the given layers above `base`.
    ///
    /// Layers whose content is `None` are skipped. Mounts that do not belong
    /// to this root are ignored.
    pub fn compose<'a, Message: 'a>(
        &self,
        base: Element<'a, Message>,
        layers: Vec<(PortalMount, Option<Element<'a, Message>>)>,
    ) -> Element<'a, Message> {
        if self.target == RenderTarget::Headless {
            return base;
        }

        let mut layers: Vec<(PortalMount, Element<'a, Message>)> = layers
            .into_iter()
            .filter(|(mount, _)| self.mounts.contains(mount))
            .filter_map(|(mount, content)| content.map(|c| (mount, c)))
            .collect();

        if layers.is_empty() {
            return base;
        }

        layers.sort_by_key(|(mount, _)| mount.z_order);

        layers
            .into_iter()
            .fold(
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(base),
                |stack, (_, layer)| stack.push(layer),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_idempotent() {
        let mut root = PortalRoot::new();
        let first = root.resolve("toasts");
        let second = root.resolve("toasts");

        assert_eq!(first, second);
        assert_eq!(root.mounts().len(), 1);
    }

    #[test]
    fn layers_stack_in_resolution_order() {
        let mut root = PortalRoot::new();
        let modal = root.resolve("modal");
        let toasts = root.resolve("toasts");

        assert!(toasts.z_order() > modal.z_order());
        assert_eq!(root.mounts(), &[modal, toasts]);
    }

    #[test]
    fn headless_root_still_resolves_mounts() {
        let mut root = PortalRoot::headless();
        let mount = root.resolve("toasts");

        assert_eq!(root.target(), RenderTarget::Headless);
        assert_eq!(mount.name(), "toasts");
    }
}
