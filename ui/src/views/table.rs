use dioxus::prelude::*;

/// Column titles plus rows of display strings, in render order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[component]
pub fn DataTable(table: Table) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    for column in table.columns.iter() {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                // Records carry no identity, so rows are keyed by position.
                for (index, row) in table.rows.iter().enumerate() {
                    tr { key: "{index}",
                        for cell in row.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
