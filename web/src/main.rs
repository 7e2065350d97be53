use dioxus::prelude::*;

use ui::components::app_shell::{register_nav, NavBuilder};
use ui::components::AppShell;
use ui::core::Location;
use ui::data::CatalogHandle;
use ui::THEME_CSS;

/// Every URL lands on the shared shell; the shell's own route table decides
/// what to show, including the NotFound page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn router_link(path: &'static str, class: &'static str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: path.to_string(),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Sidebar links go through the router instead of full page loads.
        register_nav(NavBuilder { link: router_link });
    }
    use_context_provider(CatalogHandle::sample);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        AppShell { location: Location::root().to_string() }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let location = Location::from_segments(&segments);
    rsx! {
        AppShell { location: location.to_string() }
    }
}
