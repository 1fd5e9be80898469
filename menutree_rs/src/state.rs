//! Runtime open/closed tracking for the navigation tree.
//!
//! State is a set of dot-joined paths. A path is in the set iff that node
//! and all of its ancestors should draw expanded. Everything here runs
//! synchronously inside a single event handler; there is no concurrent
//! mutation to defend against.

use std::collections::BTreeSet;

use crate::tree::{Menu, MenuEntry, RenderNode};

/// Separator between ancestor labels inside a path.
pub const PATH_SEPARATOR: char = '.';

/// Ordered set of currently expanded paths.
pub type OpenPathSet = BTreeSet<String>;

/// How top-level branches interact when a second one opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopLevelPolicy {
    /// Opening a top-level branch closes any other open one (desktop bar).
    #[default]
    Exclusive,
    /// Branches expand independently of each other (mobile panel).
    Independent,
}

/// Which tree paths are expanded right now.
///
/// Created empty on mount, discarded on navigation. Nothing survives a
/// reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open: OpenPathSet,
    policy: TopLevelPolicy,
}

impl MenuState {
    pub fn new(policy: TopLevelPolicy) -> Self {
        Self {
            open: OpenPathSet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> TopLevelPolicy {
        self.policy
    }

    /// Expands or collapses the node at `path`.
    ///
    /// Opening inserts every ancestor prefix as well, so a deep node never
    /// shows up under a collapsed parent. Under [`TopLevelPolicy::Exclusive`]
    /// it also drops paths rooted at a different top-level entry. Closing
    /// takes the whole subtree below `path` down with it.
    pub fn toggle(&mut self, path: &str) {
        if self.open.contains(path) {
            self.open
                .retain(|p| p != path && !is_strict_descendant(p, path));
        } else {
            if self.policy == TopLevelPolicy::Exclusive {
                let top = top_level(path);
                self.open.retain(|p| top_level(p) == top);
            }
            for prefix in prefixes(path) {
                self.open.insert(prefix);
            }
        }
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open.contains(path)
    }

    /// Collapses everything. Wired to outside clicks and panel dismissal.
    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn open_paths(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    /// Projects `menu` through the current open set.
    ///
    /// The projection mirrors the tree one-to-one and is rebuilt in full on
    /// every call; the view keys nothing off a previous projection.
    pub fn render(&self, menu: &Menu) -> Vec<RenderNode> {
        menu.entries()
            .iter()
            .map(|entry| self.project(entry, None))
            .collect()
    }

    fn project(&self, entry: &MenuEntry, parent_path: Option<&str>) -> RenderNode {
        let path = join_path(parent_path, entry.label());
        let children = entry
            .children()
            .iter()
            .map(|child| self.project(child, Some(&path)))
            .collect();
        RenderNode {
            label: entry.label().to_string(),
            href: entry.link_href().to_string(),
            image: entry.image().map(str::to_string),
            is_branch: entry.is_branch(),
            expanded: self.is_open(&path),
            children,
            path,
        }
    }
}

/// Joins a parent path and a label into a child path.
pub(crate) fn join_path(parent: Option<&str>, label: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{PATH_SEPARATOR}{label}"),
        None => label.to_string(),
    }
}

/// Every ancestor prefix of `path` including `path` itself, shortest first.
fn prefixes(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (idx, ch) in path.char_indices() {
        if ch == PATH_SEPARATOR {
            out.push(path[..idx].to_string());
        }
    }
    out.push(path.to_string());
    out
}

fn top_level(path: &str) -> &str {
    path.split(PATH_SEPARATOR).next().unwrap_or(path)
}

/// Segment-aware: `"Solutions"` is an ancestor of `"Solutions.UPS"` but not
/// of a sibling label that merely starts with the same characters.
fn is_strict_descendant(candidate: &str, ancestor: &str) -> bool {
    candidate.len() > ancestor.len()
        && candidate.starts_with(ancestor)
        && candidate[ancestor.len()..].starts_with(PATH_SEPARATOR)
}
