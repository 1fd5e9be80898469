//! Site header: brand, desktop dropdown navigation, utility icons, and the
//! mobile entry point.
//!
//! Desktop open/closed state lives in one `MenuState` under the exclusive
//! policy, so opening a top-level menu closes whichever other one was open.
//! A document-level `mousedown` listener collapses everything when the
//! pointer goes down outside the navigation region.

use leptos::html;
use leptos::prelude::*;
use menutree::{MenuState, RenderNode, TopLevelPolicy};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::icons::{ChevronDown, ChevronRight, GlobeIcon, LinkedinIcon, PhoneIcon, SearchIcon};
use super::{FallbackImage, MobileNav};
use crate::menu::MENU;

const LOGO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/logo-EOXa2m7MUMDskuPlh9WW3pM9P6sHv4.png";

#[component]
pub fn Nav() -> impl IntoView {
    let state = RwSignal::new(MenuState::new(TopLevelPolicy::Exclusive));
    let nav_ref = NodeRef::<html::Nav>::new();

    Effect::new(move || {
        setup_outside_click(nav_ref, state);
    });

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="brand">
                    <FallbackImage
                        src=LOGO_URL.to_string()
                        alt="Ajil Mutawara Logo".to_string()
                        width=150
                        height=40
                    />
                </a>
                <nav class="desktop-nav" node_ref=nav_ref>
                    {move || {
                        state
                            .with(|s| s.render(&MENU))
                            .into_iter()
                            .map(|node| top_level_item(node, state))
                            .collect_view()
                    }}
                </nav>
                <div class="header-icons">
                    <a href="#" aria-label="LinkedIn" class="header-icon">
                        <LinkedinIcon size=20 />
                    </a>
                    <a href="#" aria-label="Phone" class="header-icon">
                        <PhoneIcon size=20 />
                    </a>
                    <a href="#" aria-label="Language" class="header-icon">
                        <GlobeIcon size=20 />
                    </a>
                    <a href="#" aria-label="Search" class="header-icon">
                        <SearchIcon size=20 />
                    </a>
                </div>
                <MobileNav />
            </div>
        </header>
    }
}

/// Collapse the dropdowns when the pointer goes down outside the menu
/// region. The listener lives for the whole page, same as the menu itself.
fn setup_outside_click(nav_ref: NodeRef<html::Nav>, state: RwSignal<MenuState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = match (nav_ref.get_untracked(), target) {
            (Some(nav), Some(target)) => nav.contains(Some(&target)),
            _ => false,
        };
        if !inside {
            state.update(|s| s.close_all());
        }
    }) as Box<dyn FnMut(_)>);

    let _ = document.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One top-level entry: a plain link when it never grew children, otherwise
/// a toggle button plus (while expanded) the full-width panel.
fn top_level_item(node: RenderNode, state: RwSignal<MenuState>) -> AnyView {
    if !node.is_branch {
        return view! {
            <a href=node.href class="nav-link">{node.label}</a>
        }
        .into_any();
    }

    let RenderNode {
        label,
        path,
        image,
        expanded,
        children,
        ..
    } = node;

    view! {
        <div class="nav-item">
            <button
                class=if expanded { "nav-trigger active" } else { "nav-trigger" }
                aria-expanded=if expanded { "true" } else { "false" }
                aria-haspopup="true"
                on:click=move |_| state.update(|s| s.toggle(&path))
            >
                <span>{label.clone()}</span>
                <ChevronDown size=16 />
            </button>
            {expanded.then(|| mega_panel(label, image, children, state))}
        </div>
    }
    .into_any()
}

/// The full-width dropdown: preview image column on the left, category grid
/// on the right.
fn mega_panel(
    label: String,
    image: Option<String>,
    children: Vec<RenderNode>,
    state: RwSignal<MenuState>,
) -> AnyView {
    view! {
        <div class="mega-panel">
            <div class="mega-panel-inner">
                <div class="mega-preview">
                    {image.map(|src| {
                        view! {
                            <FallbackImage
                                src=src
                                alt=format!("{label} preview")
                                width=300
                                height=400
                                class="mega-preview-image"
                            />
                        }
                    })}
                    <h3 class="mega-preview-title">{label.clone()}</h3>
                </div>
                <div class="mega-content">
                    <h3 class="mega-title">{label}</h3>
                    <div class="mega-grid">
                        {children
                            .into_iter()
                            .map(|child| panel_entry(child, state))
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}

/// One cell of the category grid: a link for leaves, a toggleable heading
/// with its own sublist for nested groups.
fn panel_entry(node: RenderNode, state: RwSignal<MenuState>) -> AnyView {
    if !node.is_branch {
        return view! {
            <a href=node.href class="panel-link">
                <span>{node.label}</span>
                <ChevronRight size=16 />
            </a>
        }
        .into_any();
    }

    let RenderNode {
        label,
        path,
        expanded,
        children,
        ..
    } = node;

    view! {
        <div class="panel-group">
            <button
                class="panel-group-trigger"
                aria-expanded=if expanded { "true" } else { "false" }
                aria-haspopup="true"
                on:click=move |_| state.update(|s| s.toggle(&path))
            >
                <span>{label}</span>
                <ChevronDown size=16 />
            </button>
            {expanded
                .then(|| {
                    view! {
                        <div class="panel-sublist">
                            {children
                                .into_iter()
                                .map(|leaf| {
                                    view! {
                                        <a href=leaf.href class="panel-sublink">
                                            <span>{leaf.label}</span>
                                            <ChevronRight size=14 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
    .into_any()
}
