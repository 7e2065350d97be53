use dioxus::prelude::*;

use super::PageHeader;
use crate::data::use_catalog;
use crate::{i18n, t};

#[component]
pub fn Zones() -> Element {
    let _locale = i18n::use_locale();
    let catalog = use_catalog();
    let zones = catalog.zones();

    rsx! {
        section { class: "page page-zones",
            PageHeader {
                title: t!("zones-title"),
                intro: t!("zones-intro"),
            }
            div { class: "cards",
                for (index, zone) in zones.iter().enumerate() {
                    div { class: "card", key: "{index}",
                        h3 { "{zone.name}" }
                        p { "{zone.description}" }
                    }
                }
            }
        }
    }
}
