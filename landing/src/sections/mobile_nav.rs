//! Hamburger toggle and the slide-down panel for narrow viewports.
//!
//! The panel keeps its own `MenuState` under the independent policy:
//! branches expand without closing each other. Collapsing the panel resets
//! every branch.

use leptos::prelude::*;
use menutree::{MenuState, RenderNode, TopLevelPolicy};

use super::icons::{
    ChevronDown, ChevronRight, CloseIcon, GlobeIcon, LinkedinIcon, MenuIcon, PhoneIcon, SearchIcon,
};
use crate::menu::MENU;

#[component]
pub fn MobileNav() -> impl IntoView {
    let (panel_open, set_panel_open) = signal(false);
    let state = RwSignal::new(MenuState::new(TopLevelPolicy::Independent));

    let toggle_panel = move |_| {
        set_panel_open.update(|open| *open = !*open);
        if !panel_open.get_untracked() {
            state.update(|s| s.close_all());
        }
    };

    view! {
        <button class="mobile-toggle" on:click=toggle_panel aria-label="Toggle mobile menu">
            {move || {
                if panel_open.get() {
                    view! { <CloseIcon size=24 /> }.into_any()
                } else {
                    view! { <MenuIcon size=24 /> }.into_any()
                }
            }}
        </button>
        <div class=move || {
            if panel_open.get() { "mobile-panel open" } else { "mobile-panel" }
        }>
            <nav class="mobile-nav">
                {move || {
                    state
                        .with(|s| s.render(&MENU))
                        .into_iter()
                        .map(|node| mobile_entry(node, state))
                        .collect_view()
                }}
                <div class="mobile-icons">
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
            </nav>
        </div>
    }
}

/// One panel row, nesting into itself for expanded branches.
fn mobile_entry(node: RenderNode, state: RwSignal<MenuState>) -> AnyView {
    if !node.is_branch {
        return view! {
            <a href=node.href class="mobile-link">
                <span>{node.label}</span>
                <ChevronRight size=14 />
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
        <div class="mobile-group">
            <button
                class="mobile-trigger"
                aria-expanded=if expanded { "true" } else { "false" }
                on:click=move |_| state.update(|s| s.toggle(&path))
            >
                <span>{label}</span>
                <ChevronDown size=16 />
            </button>
            {expanded
                .then(|| {
                    view! {
                        <div class="mobile-children">
                            {children
                                .into_iter()
                                .map(|child| mobile_entry(child, state))
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
    .into_any()
}
