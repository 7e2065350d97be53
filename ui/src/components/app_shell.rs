use std::cell::RefCell;
use std::rc::Rc;

use crate::config::APP_NAME;
use crate::core::{registry, Content, Location, NavLink, ShellState};
use crate::i18n;
use crate::t;
use crate::views::NotFound;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Link factory registered by the platform crate.
///
/// `ui` does not know the platform's `Route` enum, so platforms (web/desktop)
/// register a builder that turns a path into their router's `Link`. Without
/// one, plain anchors are rendered (full page loads, but still correct).
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// fn router_link(path: &'static str, class: &'static str, label: &str) -> Element {
///     rsx!(Link { class: "{class}", to: path.to_string(), "{label}" })
/// }
/// register_nav(NavBuilder { link: router_link });
/// ```
pub struct NavBuilder {
    // Must return an element whose only child is `label`, carrying `class`.
    pub link: fn(path: &'static str, class: &'static str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered; keeping the first one");
    }
}

/// Link to `path` through the registered builder, or a plain anchor.
pub fn nav_anchor(path: &'static str, class: &'static str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(path, class, label),
        None => rsx! {
            a { class: "{class}", href: "{path}", "{label}" }
        },
    }
}

fn sidebar_link(link: &NavLink<'_>) -> Element {
    let label = (link.route.title)();
    nav_anchor(link.route.path, link.class(), &label)
}

/// Sidebar navigation plus the content region for `location`.
///
/// `location` is whatever path the platform router currently shows; the
/// shell normalizes it, highlights the matching sidebar links and renders the
/// registered page, or [`NotFound`] when nothing is registered there.
#[component]
pub fn AppShell(location: String) -> Element {
    i18n::init();

    // Language code shared with the pages below (see `i18n::use_locale`).
    // Mirrors into the platform's signal when one was provided.
    let platform_lang: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut lang = use_context_provider(|| {
        Signal::new(
            platform_lang
                .map(|code| code())
                .unwrap_or_else(i18n::current_language),
        )
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                lang.set(val.clone());
                if let Some(mut code) = platform_lang {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, tag = %val, "language switch failed"),
        }
    };

    let shell = use_hook(|| Rc::new(RefCell::new(ShellState::new())));
    let view = shell
        .borrow_mut()
        .navigate(registry(), Location::parse(&location));

    let content = match view.content {
        Content::Page(route) => (route.render)(),
        Content::NotFound => rsx! {
            NotFound { path: view.location.to_string() }
        },
    };

    rsx! {
        div { class: "app",
            aside { class: "sidebar",
                div { class: "brand",
                    span { class: "brand__mark", "{APP_NAME}" }
                    span { class: "brand__tagline", {t!("sidebar-tagline")} }
                }

                nav { aria_label: t!("nav-label"),
                    for link in view.links.iter() {
                        {sidebar_link(link)}
                    }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "sidebar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }

            main { class: "content", {content} }
        }
    }
}
