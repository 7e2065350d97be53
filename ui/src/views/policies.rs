use dioxus::prelude::*;

use super::{DataTable, PageHeader, Table};
use crate::data::{use_catalog, Policy};
use crate::{i18n, t};

pub fn policy_table(policies: &[Policy]) -> Table {
    Table {
        columns: vec![
            t!("column-name"),
            t!("column-source"),
            t!("column-destination"),
            t!("column-action"),
        ],
        rows: policies
            .iter()
            .map(|policy| {
                vec![
                    policy.name.clone(),
                    policy.source.clone(),
                    policy.destination.clone(),
                    policy.action.clone(),
                ]
            })
            .collect(),
    }
}

#[component]
pub fn Policies() -> Element {
    let _locale = i18n::use_locale();
    let catalog = use_catalog();
    let table = policy_table(&catalog.policies());

    rsx! {
        section { class: "page page-policies",
            PageHeader {
                title: t!("policies-title"),
                intro: t!("policies-intro"),
            }
            DataTable { table }
        }
    }
}
