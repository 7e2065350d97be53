//! End-to-end checks of the navigation shell through the public API: the
//! shipped route table, active-link derivation and content dispatch.

use ui::core::{is_active, resolve, Content, Location, ShellState, ShellView};
use ui::data::{Catalog, SampleCatalog};
use ui::registry;
use ui::views::{node_table, policy_table};

fn active_labels(view: &ShellView<'_>) -> Vec<&'static str> {
    view.active_links().map(|link| link.route.label).collect()
}

#[test]
fn supported_paths_are_exactly_the_four_pages() {
    assert_eq!(registry().paths(), ["/", "/nodes", "/zones", "/policies"]);
}

#[test]
fn every_registered_path_has_exactly_one_active_link() {
    let registry = registry();
    let mut state = ShellState::new();

    for route in registry.iter() {
        let view = state.navigate(registry, Location::parse(route.path));
        assert_eq!(active_labels(&view), [route.label], "at {}", route.path);

        let dispatched = view.content.route().map(|r| r.path);
        assert_eq!(dispatched, Some(route.path));
    }
}

#[test]
fn root_link_requires_exact_location() {
    let registry = registry();
    let root = registry.find("/").expect("root route is registered");

    assert!(is_active(root, &Location::parse("/")));
    assert!(is_active(root, &Location::parse("")));
    for location in ["/nodes", "/zones", "/policies", "/nodes/exit-us-east-1", "/nope"] {
        assert!(!is_active(root, &Location::parse(location)), "root active at {location}");
    }
}

#[test]
fn sub_page_highlights_enclosing_route_but_dispatches_not_found() {
    let registry = registry();
    let mut state = ShellState::new();

    let view = state.navigate(registry, Location::parse("/zones/us-east"));
    assert_eq!(active_labels(&view), ["Zones"]);
    assert!(view.content.is_not_found());
}

#[test]
fn unregistered_location_renders_not_found() {
    let registry = registry();
    for location in ["/settings", "/node", "/policies-old", "/nodes/x"] {
        let content = resolve(registry, &Location::parse(location));
        assert!(
            matches!(content, Content::NotFound),
            "expected NotFound at {location}"
        );
    }
}

#[test]
fn trailing_slash_and_query_resolve_to_the_page() {
    let registry = registry();
    let content = resolve(registry, &Location::parse("/policies/?sort=name"));
    assert_eq!(content.route().map(|r| r.label), Some("Policies"));
}

#[test]
fn paths_match_regardless_of_case() {
    let registry = registry();
    let mut state = ShellState::new();

    let view = state.navigate(registry, Location::parse("/NODES"));
    assert_eq!(active_labels(&view), ["Nodes"]);
    assert_eq!(view.content.route().map(|r| r.path), Some("/nodes"));
}

#[test]
fn newest_location_wins() {
    let registry = registry();
    let mut state = ShellState::new();

    let slow = state.observe(Location::parse("/nodes"));
    let fast = state.observe(Location::parse("/policies"));

    assert!(state.apply(ShellView::evaluate(registry, fast)));
    assert!(!state.apply(ShellView::evaluate(registry, slow)));

    let current = state.current().expect("view applied");
    assert_eq!(active_labels(current), ["Policies"]);
    assert_eq!(state.latest_seq(), 2);
}

#[test]
fn nodes_and_policies_tables_match_sample_data() {
    ui::i18n::init_fallback();

    let nodes = node_table(&SampleCatalog.nodes());
    assert_eq!(nodes.columns, ["Name", "Address", "Zone"]);
    assert_eq!(nodes.rows.len(), 2);
    assert_eq!(nodes.rows[0], ["exit-us-east-1", "100.64.10.1", "us-east"]);
    assert_eq!(nodes.rows[1], ["gateway-eu-central", "100.64.20.2", "eu-central"]);

    let policies = policy_table(&SampleCatalog.policies());
    assert_eq!(policies.columns, ["Name", "Source", "Destination", "Action"]);
    assert_eq!(
        policies.rows,
        [
            ["Allow Internal", "us-east", "eu-central", "allow"],
            ["Block Unknown", "unknown", "core-services", "deny"],
        ]
    );
}

#[test]
fn sample_zones_in_declaration_order() {
    let zones = SampleCatalog.zones();
    let cards: Vec<_> = zones
        .iter()
        .map(|z| (z.name.as_str(), z.description.as_str()))
        .collect();
    assert_eq!(
        cards,
        [
            ("us-east", "Primary exits for US East."),
            ("eu-central", "Regional gateways for Europe."),
        ]
    );
}
