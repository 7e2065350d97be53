//! Server-side renders of the shell: what the sidebar and the content region
//! actually contain at each location.

use dioxus::prelude::*;
use ui::components::app_shell::AppShellProps;
use ui::components::AppShell;
use ui::data::{Catalog, CatalogHandle, Node, Policy, Zone};
use ui::registry;
use ui::views::Zones;

fn render_at(location: &str) -> String {
    ui::i18n::init_fallback();
    let mut dom = VirtualDom::new_with_props(
        AppShell,
        AppShellProps {
            location: location.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn active_anchor(path: &str, label: &str) -> String {
    format!(r#"<a class="nav-link active" href="{path}">{label}</a>"#)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` missing from:\n{html}"))
}

#[test]
fn each_page_renders_with_its_link_active() {
    let expected = [
        ("/", "Dashboard", "<h1>Dashboard</h1>"),
        ("/nodes", "Nodes", "<td>exit-us-east-1</td><td>100.64.10.1</td><td>us-east</td>"),
        ("/zones", "Zones", "<h3>us-east</h3><p>Primary exits for US East.</p>"),
        ("/policies", "Policies", "<td>Block Unknown</td><td>unknown</td><td>core-services</td><td>deny</td>"),
    ];
    assert_eq!(expected.len(), registry().len());

    for (path, label, marker) in expected {
        let html = render_at(path);
        assert_eq!(html.matches("nav-link active").count(), 1, "at {path}:\n{html}");
        position(&html, &active_anchor(path, label));
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 3, "at {path}");

        let content = position(&html, r#"<main class="content">"#);
        assert!(position(&html, marker) > content, "`{marker}` outside the content region at {path}");
        assert!(!html.contains("not-found"), "NotFound rendered at {path}");
    }
}

#[test]
fn dashboard_cards_keep_their_order() {
    let html = render_at("/");
    let nodes = position(&html, "<h2>0 Active</h2>");
    let policies = position(&html, "<h2>0 Draft</h2>");
    let zones = position(&html, "<h2>0 Zones</h2>");
    assert!(nodes < policies && policies < zones);
}

#[test]
fn tables_render_headers_and_rows_in_order() {
    let nodes = render_at("/nodes");
    position(&nodes, "<th>Name</th><th>Address</th><th>Zone</th>");
    assert!(
        position(&nodes, "<td>exit-us-east-1</td>") < position(&nodes, "<td>gateway-eu-central</td>")
    );

    let policies = render_at("/policies");
    position(&policies, "<th>Name</th><th>Source</th><th>Destination</th><th>Action</th>");
    position(&policies, "<td>Allow Internal</td><td>us-east</td><td>eu-central</td><td>allow</td>");
}

#[test]
fn zones_render_one_card_per_zone() {
    let html = render_at("/zones");
    let first = position(&html, "<h3>us-east</h3><p>Primary exits for US East.</p>");
    let second = position(&html, "<h3>eu-central</h3><p>Regional gateways for Europe.</p>");
    assert!(first < second);
}

#[test]
fn unregistered_path_renders_not_found() {
    let html = render_at("/bogus");
    assert!(!html.contains("nav-link active"));
    let content = position(&html, r#"<main class="content">"#);
    assert!(position(&html, r#"<section class="page not-found">"#) > content);
    position(&html, r#"<code class="not-found__path">/bogus</code>"#);
    position(&html, r#"<a class="not-found__back" href="/">"#);
}

#[test]
fn sub_page_keeps_enclosing_link_but_shows_not_found() {
    let html = render_at("/nodes/x");
    assert_eq!(html.matches("nav-link active").count(), 1);
    position(&html, &active_anchor("/nodes", "Nodes"));
    position(&html, r#"<code class="not-found__path">/nodes/x</code>"#);
    assert!(!html.contains("<td>exit-us-east-1</td>"));
}

#[test]
fn upper_case_location_renders_the_page() {
    let html = render_at("/NODES");
    position(&html, &active_anchor("/nodes", "Nodes"));
    position(&html, "<td>gateway-eu-central</td>");
    assert!(!html.contains("not-found"));
}

struct LabCatalog;

impl Catalog for LabCatalog {
    fn nodes(&self) -> Vec<Node> {
        Vec::new()
    }

    fn zones(&self) -> Vec<Zone> {
        vec![Zone {
            name: "lab".into(),
            description: "Bench hardware.".into(),
        }]
    }

    fn policies(&self) -> Vec<Policy> {
        Vec::new()
    }
}

#[component]
fn LabZones() -> Element {
    use_context_provider(|| CatalogHandle::new(LabCatalog));
    rsx! { Zones {} }
}

#[test]
fn pages_read_the_provided_catalog() {
    ui::i18n::init_fallback();
    let mut dom = VirtualDom::new(LabZones);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    position(&html, "<h3>lab</h3><p>Bench hardware.</p>");
    assert!(!html.contains("us-east"));
}
