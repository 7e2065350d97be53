use dioxus::prelude::*;

use super::PageHeader;
use crate::{i18n, t};

/// One summary card on the dashboard. Counts are placeholders until the
/// console is connected to a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub badge: String,
    pub headline: String,
    pub body: String,
}

pub fn summary_cards() -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            badge: t!("dashboard-nodes-badge"),
            headline: t!("dashboard-nodes-headline"),
            body: t!("dashboard-nodes-body"),
        },
        SummaryCard {
            badge: t!("dashboard-policies-badge"),
            headline: t!("dashboard-policies-headline"),
            body: t!("dashboard-policies-body"),
        },
        SummaryCard {
            badge: t!("dashboard-zones-badge"),
            headline: t!("dashboard-zones-headline"),
            body: t!("dashboard-zones-body"),
        },
    ]
}

#[component]
pub fn Dashboard() -> Element {
    // Re-render when the language changes.
    let _locale = i18n::use_locale();
    let cards = summary_cards();

    rsx! {
        section { class: "page page-dashboard",
            PageHeader {
                title: t!("dashboard-title"),
                intro: t!("dashboard-intro"),
            }
            div { class: "cards",
                for card in cards.into_iter() {
                    div { class: "card", key: "{card.badge}",
                        div { class: "badge", "{card.badge}" }
                        h2 { "{card.headline}" }
                        p { "{card.body}" }
                    }
                }
            }
        }
    }
}
