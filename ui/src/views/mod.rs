mod dashboard;
pub use dashboard::{summary_cards, Dashboard, SummaryCard};

mod nodes;
pub use nodes::{node_table, Nodes};

mod zones;
pub use zones::Zones;

mod policies;
pub use policies::{policy_table, Policies};

mod not_found;
pub use not_found::NotFound;

mod table;
pub use table::{DataTable, Table};

use dioxus::prelude::*;

/// Title + one-line introduction shown at the top of every page.
#[component]
pub fn PageHeader(title: String, intro: String) -> Element {
    rsx! {
        header { class: "page-header",
            h1 { "{title}" }
            p { "{intro}" }
        }
    }
}
