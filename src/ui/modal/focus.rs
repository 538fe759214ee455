// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus model.
//!
//! Iced has no document object model, so the overlay layer tracks focus in
//! a [`FocusTree`]: a tree of element IDs in document order, each marked
//! with how it can receive focus. The modal controller only talks to the
//! [`FocusHost`] trait, and every query walks the live tree. Nothing about
//! the focusable set is cached between calls.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Identifier of an element in the focus tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Cow<'static, str>);

impl ElementId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ElementId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an element participates in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focusability {
    /// Never receives focus.
    #[default]
    None,
    /// Can be focused programmatically but is skipped by Tab.
    Programmatic,
    /// Part of the Tab sequence.
    Tabbable,
}

/// The operations the modal controller needs from the focus owner.
pub trait FocusHost {
    /// Returns the currently focused element.
    fn active_element(&self) -> Option<&ElementId>;

    /// Moves focus to `id`. Returns `false`, leaving focus unchanged, when the
    /// element is detached, disabled or not focusable.
    fn focus(&mut self, id: &ElementId) -> bool;

    /// Clears focus.
    fn blur(&mut self);

    /// Returns whether `id` is currently part of the tree.
    fn is_attached(&self, id: &ElementId) -> bool;

    /// Returns the tabbable descendants of `scope` in document order.
    fn focusables_within(&self, scope: &ElementId) -> Vec<ElementId>;
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    focusability: Focusability,
    disabled: bool,
}

/// A document-ordered tree of focus targets.
#[derive(Debug, Clone, Default)]
pub struct FocusTree {
    nodes: HashMap<ElementId, Node>,
    roots: Vec<ElementId>,
    focused: Option<ElementId>,
}

impl FocusTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` as the last child of `parent` (or as a new root).
    ///
    /// Returns `false` if `id` already exists or `parent` is unknown.
    pub fn insert(
        &mut self,
        parent: Option<&ElementId>,
        id: impl Into<ElementId>,
        focusability: Focusability,
    ) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }

        match parent {
            Some(parent_id) => match self.nodes.get_mut(parent_id) {
                Some(parent_node) => parent_node.children.push(id.clone()),
                None => return false,
            },
            None => self.roots.push(id.clone()),
        }

        self.nodes.insert(
            id,
            Node {
                parent: parent.cloned(),
                children: Vec::new(),
                focusability,
                disabled: false,
            },
        );
        true
    }

    /// Detaches `id` and its whole subtree. Focus inside the subtree is lost.
    pub fn remove(&mut self, id: &ElementId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };

        match node.parent.clone() {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|c| c != id);
                }
            }
            None => self.roots.retain(|r| r != id),
        }

        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&current) {
                stack.extend(removed.children);
            }
            if self.focused.as_ref() == Some(&current) {
                self.focused = None;
            }
        }
        true
    }

    /// Enables or disables an element. Disabling the focused element blurs it.
    pub fn set_disabled(&mut self, id: &ElementId, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.disabled = disabled;
        }
        if disabled && self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    /// Returns whether `id` is the focused element.
    #[must_use]
    pub fn is_focused(&self, id: &ElementId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn can_focus(&self, id: &ElementId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|n| !n.disabled && n.focusability != Focusability::None)
    }

    /// Depth-first walk of the subtree below `scope`, in document order.
    fn descendants(&self, scope: &ElementId) -> Vec<ElementId> {
        let mut order = Vec::new();
        let Some(node) = self.nodes.get(scope) else {
            return order;
        };

        let mut stack: Vec<&ElementId> = node.children.iter().rev().collect();
        while let Some(current) = stack.pop() {
            order.push(current.clone());
            if let Some(child) = self.nodes.get(current) {
                stack.extend(child.children.iter().rev());
            }
        }
        order
    }
}

impl FocusHost for FocusTree {
    fn active_element(&self) -> Option<&ElementId> {
        self.focused.as_ref()
    }

    fn focus(&mut self, id: &ElementId) -> bool {
        if !self.can_focus(id) {
            return false;
        }
        self.focused = Some(id.clone());
        true
    }

    fn blur(&mut self) {
        self.focused = None;
    }

    fn is_attached(&self, id: &ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    fn focusables_within(&self, scope: &ElementId) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|n| !n.disabled && n.focusability == Focusability::Tabbable)
            })
            .collect()
    }
}
