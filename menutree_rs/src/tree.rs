//! The static navigation tree and its renderable projection.

use serde::Serialize;

use crate::slug::PLACEHOLDER_HREF;

/// One node of the navigation tree.
///
/// Built once from the menu definition at page start, never mutated at
/// runtime. Nesting stays within top level -> category -> leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MenuEntry {
    /// Directly navigable link with no children.
    Leaf { label: String, href: String },
    /// Expandable branch. `image` is only carried by top-level entries.
    Group {
        label: String,
        href: Option<String>,
        image: Option<String>,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Leaf { label, .. } | MenuEntry::Group { label, .. } => label,
        }
    }

    /// Whether the entry toggles open at all. A group that never grew
    /// children behaves as a plain link instead.
    pub fn is_branch(&self) -> bool {
        matches!(self, MenuEntry::Group { children, .. } if !children.is_empty())
    }

    /// Target used when the entry is rendered as a plain link.
    pub fn link_href(&self) -> &str {
        match self {
            MenuEntry::Leaf { href, .. } => href,
            MenuEntry::Group { href, .. } => href.as_deref().unwrap_or(PLACEHOLDER_HREF),
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            MenuEntry::Leaf { .. } => None,
            MenuEntry::Group { image, .. } => image.as_deref(),
        }
    }

    /// Children in display order; empty for leaves.
    pub fn children(&self) -> &[MenuEntry] {
        match self {
            MenuEntry::Leaf { .. } => &[],
            MenuEntry::Group { children, .. } => children,
        }
    }
}

/// The resolved, immutable menu. Root entries in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub(crate) fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// An empty menu, the fallback when no definition could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renderable projection of one entry, carrying its open/closed state.
///
/// Rebuilt in full from `Menu` + `MenuState` on every state change; the view
/// holds no reference to a previous projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub label: String,
    /// Plain-link target (leaf href, or the group's own href fallback).
    pub href: String,
    /// Dot-joined ancestor labels, the key for open/closed state.
    pub path: String,
    pub image: Option<String>,
    /// True when the node has children and therefore a toggle.
    pub is_branch: bool,
    pub expanded: bool,
    pub children: Vec<RenderNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn childless_group_falls_back_to_own_href() {
        let group = MenuEntry::Group {
            label: "References".to_string(),
            href: Some("#references".to_string()),
            image: None,
            children: Vec::new(),
        };
        assert!(!group.is_branch());
        assert_eq!(group.link_href(), "#references");
    }

    #[test]
    fn childless_group_without_href_uses_placeholder() {
        let group = MenuEntry::Group {
            label: "References".to_string(),
            href: None,
            image: None,
            children: Vec::new(),
        };
        assert_eq!(group.link_href(), PLACEHOLDER_HREF);
    }
}
