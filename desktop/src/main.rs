#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::app_shell::{register_nav, NavBuilder};
use ui::components::AppShell;
use ui::config::APP_NAME;
use ui::core::Location;
use ui::data::CatalogHandle;
use ui::THEME_CSS;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("{APP_NAME} – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1200.0, 780.0)),
            ),
        )
        .launch(App);
}

fn router_link(path: &'static str, class: &'static str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: path.to_string(), "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global language code; the shell mirrors switches into it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(CatalogHandle::sample);

    register_nav(NavBuilder { link: router_link });

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! { AppShell { location: Location::root().to_string() } }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    let location = Location::from_segments(&segments);
    rsx! { AppShell { location: location.to_string() } }
}
