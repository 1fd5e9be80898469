//! Behavioral suite for the navigation model: open-path bookkeeping, the
//! desktop exclusivity rule, and the projection handed to the view.

use menutree::{Menu, MenuState, RenderNode, TopLevelPolicy, slug};

/// Same shape as the shipped definition, trimmed to what the assertions
/// need.
const FIXTURE: &str = r##"[
    {
        "name": "Solutions",
        "href": "#",
        "image": "https://cdn.example.com/background.jpg",
        "items": [
            "Aluminum Profiles",
            "Partition Systems",
            {
                "name": "Commercial UPS Systems",
                "href": "#commercial-ups",
                "items": [
                    "Line Interactive for SMB and Server Rooms",
                    "Modular for scalability",
                    "Lithium battery Storage Solutions"
                ]
            }
        ]
    },
    {
        "name": "Project Services",
        "href": "#",
        "image": "https://cdn.example.com/background.jpg",
        "items": [
            "Supply Services",
            {
                "name": "Solutions Consulting",
                "href": "#solutions-consulting",
                "items": ["Regulatory Compliance"]
            }
        ]
    },
    { "name": "References", "href": "#", "image": "https://cdn.example.com/background.jpg" },
    { "name": "Downloads", "href": "#" }
]"##;

fn fixture_menu() -> Menu {
    Menu::from_json(FIXTURE).expect("fixture menu parses")
}

fn find<'a>(nodes: &'a [RenderNode], label: &str) -> &'a RenderNode {
    nodes
        .iter()
        .find(|n| n.label == label)
        .unwrap_or_else(|| panic!("no node labelled {label}"))
}

#[test]
fn opening_a_path_opens_every_ancestor() {
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);
    state.toggle("Solutions.Commercial UPS Systems");

    assert!(state.is_open("Solutions"));
    assert!(state.is_open("Solutions.Commercial UPS Systems"));
}

#[test]
fn closing_a_path_closes_its_subtree() {
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);
    state.toggle("Solutions");
    state.toggle("Solutions.Commercial UPS Systems");
    assert!(state.is_open("Solutions.Commercial UPS Systems"));

    state.toggle("Solutions");

    assert!(!state.is_open("Solutions"));
    assert!(!state.is_open("Solutions.Commercial UPS Systems"));
}

#[test]
fn close_all_leaves_nothing_open() {
    let mut state = MenuState::new(TopLevelPolicy::Independent);
    state.toggle("Solutions.Commercial UPS Systems");
    state.toggle("Project Services");

    state.close_all();

    assert!(!state.is_open("Solutions"));
    assert!(!state.is_open("Solutions.Commercial UPS Systems"));
    assert!(!state.is_open("Project Services"));
    assert_eq!(state.open_paths().count(), 0);
}

#[test]
fn double_toggle_restores_the_previous_state() {
    let mut state = MenuState::new(TopLevelPolicy::Independent);
    state.toggle("Solutions");
    state.toggle("Solutions.Commercial UPS Systems");
    let before = state.clone();

    state.toggle("About us");
    state.toggle("About us");

    assert_eq!(state, before);
}

#[test]
fn double_toggle_from_empty_is_a_noop_under_exclusive_policy() {
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);
    let before = state.clone();

    state.toggle("Solutions");
    state.toggle("Solutions");

    assert_eq!(state, before);
}

#[test]
fn slug_contract_is_bit_exact() {
    assert_eq!(
        slug("Line Interactive for SMB and Server Rooms"),
        "line-interactive-for-smb-and-server-rooms"
    );
}

#[test]
fn desktop_opens_one_top_level_branch_at_a_time() {
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);
    state.toggle("Solutions");
    assert!(state.is_open("Solutions"));

    state.toggle("Project Services");

    assert!(state.is_open("Project Services"));
    assert!(!state.is_open("Solutions"));
}

#[test]
fn mobile_keeps_independent_branches_open() {
    let mut state = MenuState::new(TopLevelPolicy::Independent);
    state.toggle("Solutions");
    state.toggle("Project Services");

    assert!(state.is_open("Solutions"));
    assert!(state.is_open("Project Services"));
}

#[test]
fn references_renders_as_a_direct_link() {
    // A top-level entry that never grew children carries no toggle; the
    // view links it straight through and the open set stays untouched.
    let menu = fixture_menu();
    let state = MenuState::new(TopLevelPolicy::Exclusive);
    let nodes = state.render(&menu);

    let references = find(&nodes, "References");
    assert!(!references.is_branch);
    assert_eq!(references.href, "#");
    assert!(references.children.is_empty());
}

#[test]
fn projection_mirrors_tree_and_open_set() {
    let menu = fixture_menu();
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);
    state.toggle("Solutions.Commercial UPS Systems");

    let nodes = state.render(&menu);

    let solutions = find(&nodes, "Solutions");
    assert!(solutions.expanded);
    assert_eq!(solutions.image.as_deref(), Some("https://cdn.example.com/background.jpg"));

    let ups = find(&solutions.children, "Commercial UPS Systems");
    assert!(ups.expanded);
    assert_eq!(ups.path, "Solutions.Commercial UPS Systems");

    let leaf = find(&ups.children, "Modular for scalability");
    assert!(!leaf.is_branch);
    assert_eq!(leaf.href, "#commercial-ups#modular-for-scalability");

    let services = find(&nodes, "Project Services");
    assert!(!services.expanded);
    // Collapsed branches still project their children; visibility is the
    // view's call.
    assert_eq!(services.children.len(), 2);
}

#[test]
fn projection_is_rederived_from_scratch() {
    let menu = fixture_menu();
    let mut state = MenuState::new(TopLevelPolicy::Exclusive);

    state.toggle("Solutions");
    let open = state.render(&menu);
    assert!(find(&open, "Solutions").expanded);

    state.close_all();
    let closed = state.render(&menu);
    assert!(!find(&closed, "Solutions").expanded);
    assert_eq!(open.len(), closed.len());
}
