//! Menu definition loading.
//!
//! The tree ships as JSON next to the app. Children may be full nodes or
//! bare label strings, shorthand for a plain link whose anchor is composed
//! from the parent. Shorthand is resolved once here so the view never
//! branches on entry shape.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::slug::anchor_href;
use crate::state::join_path;
use crate::tree::{Menu, MenuEntry};

/// Nesting never goes past top level -> category -> leaf.
const MAX_DEPTH: usize = 3;

#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("menu definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate sibling label at `{path}`")]
    DuplicateSibling { path: String },
    #[error("menu nesting exceeds {} levels at `{path}`", MAX_DEPTH)]
    TooDeep { path: String },
}

/// One entry as written in the JSON definition.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntrySpec {
    Label(String),
    Node(NodeSpec),
}

impl EntrySpec {
    fn label(&self) -> &str {
        match self {
            EntrySpec::Label(label) => label,
            EntrySpec::Node(node) => &node.name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    name: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    items: Vec<EntrySpec>,
}

impl Menu {
    /// Parses and resolves a JSON menu definition.
    ///
    /// Bare strings become plain-link leaves with their anchor composed
    /// against the parent's href. Sibling labels must be unique and nesting
    /// is capped at three levels; violations fail the whole load rather
    /// than producing a half-usable tree.
    pub fn from_json(raw: &str) -> Result<Menu, MenuConfigError> {
        let specs: Vec<EntrySpec> = serde_json::from_str(raw)?;
        let entries = resolve_siblings(&specs, None, None, 1)?;
        Ok(Menu::new(entries))
    }
}

fn resolve_siblings(
    specs: &[EntrySpec],
    parent_path: Option<&str>,
    parent_href: Option<&str>,
    depth: usize,
) -> Result<Vec<MenuEntry>, MenuConfigError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(specs.len());
    let mut entries = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = join_path(parent_path, spec.label());
        if depth > MAX_DEPTH {
            return Err(MenuConfigError::TooDeep { path });
        }
        if !seen.insert(spec.label()) {
            return Err(MenuConfigError::DuplicateSibling { path });
        }
        entries.push(match spec {
            EntrySpec::Label(label) => MenuEntry::Leaf {
                label: label.clone(),
                href: anchor_href(parent_href, label),
            },
            EntrySpec::Node(node) => MenuEntry::Group {
                label: node.name.clone(),
                href: node.href.clone(),
                // Preview images only make sense on the top-level panel.
                image: if depth == 1 { node.image.clone() } else { None },
                children: resolve_siblings(
                    &node.items,
                    Some(&path),
                    node.href.as_deref(),
                    depth + 1,
                )?,
            },
        });
    }
    Ok(entries)
}
