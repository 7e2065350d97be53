use dioxus::prelude::*;

use super::{DataTable, PageHeader, Table};
use crate::data::{use_catalog, Node};
use crate::{i18n, t};

pub fn node_table(nodes: &[Node]) -> Table {
    Table {
        columns: vec![t!("column-name"), t!("column-address"), t!("column-zone")],
        rows: nodes
            .iter()
            .map(|node| vec![node.name.clone(), node.address.clone(), node.zone.clone()])
            .collect(),
    }
}

#[component]
pub fn Nodes() -> Element {
    let _locale = i18n::use_locale();
    let catalog = use_catalog();
    let table = node_table(&catalog.nodes());

    rsx! {
        section { class: "page page-nodes",
            PageHeader {
                title: t!("nodes-title"),
                intro: t!("nodes-intro"),
            }
            DataTable { table }
        }
    }
}
