use dioxus::prelude::*;

use crate::components::app_shell::nav_anchor;
use crate::config::HOME_PATH;
use crate::{i18n, t};

/// Shown in the content region when no route is registered at `path`.
#[component]
pub fn NotFound(path: String) -> Element {
    let _locale = i18n::use_locale();
    let back = nav_anchor(HOME_PATH, "not-found__back", &t!("not-found-back"));

    rsx! {
        section { class: "page not-found",
            header { class: "page-header",
                h1 { {t!("not-found-title")} }
                p { {t!("not-found-body")} }
                code { class: "not-found__path", "{path}" }
            }
            {back}
        }
    }
}
