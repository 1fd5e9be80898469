//! # menutree
//!
//! Navigation menu model for the Ajil Mutawara landing page.
//!
//! The crate owns two things and nothing else:
//!
//! - **`Menu`** - the static navigation tree, resolved once from a JSON
//!   definition at page start and never mutated afterwards.
//! - **`MenuState`** - the set of tree paths currently expanded, mutated
//!   synchronously by the view's event handlers.
//!
//! The rendering layer asks `MenuState` which branches are open (or takes a
//! full [`RenderNode`] projection) and draws accordingly; it never mutates
//! the tree.
//!
//! ```rust
//! use menutree::{Menu, MenuState, TopLevelPolicy};
//!
//! let menu = Menu::from_json(r##"[{ "name": "Solutions", "href": "#",
//!     "items": ["Aluminum Profiles"] }]"##).unwrap();
//!
//! let mut state = MenuState::new(TopLevelPolicy::Exclusive);
//! state.toggle("Solutions");
//! assert!(state.is_open("Solutions"));
//!
//! let nodes = state.render(&menu);
//! assert!(nodes[0].expanded);
//! ```

mod config;
mod slug;
mod state;
mod tree;

pub use config::MenuConfigError;
pub use slug::{PLACEHOLDER_HREF, anchor_href, slug};
pub use state::{MenuState, OpenPathSet, PATH_SEPARATOR, TopLevelPolicy};
pub use tree::{Menu, MenuEntry, RenderNode};
