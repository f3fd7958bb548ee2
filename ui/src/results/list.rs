use crate::results::{format_cell, ReportTable};
use crate::t;
use crate::views::use_session;
use dioxus::prelude::*;

#[component]
pub fn ResultsList() -> Element {
    let session = use_session();
    let Some((table, submitted)) = session.with(|state| (state.chart_table(), state.table().len()))
    else {
        return rsx! {};
    };

    let columns = table.schema().data_columns().to_vec();
    let rows = table_rows(&table, submitted);
    let count = rows.len();

    rsx! {
        section { class: "results-card results-list",
            div { class: "results-card__header",
                h2 { {t!("results-list-title")} }
                if count > 0 {
                    span { class: "results-card__meta", {t!("results-list-count", count = count)} }
                }
            }

            if rows.is_empty() {
                p { class: "results-card__placeholder", {t!("results-list-empty")} }
            } else {
                div { class: "results-list__scroll",
                    table { class: "results-list__table",
                        thead {
                            tr {
                                th { {t!("results-list-date")} }
                                for column in columns.iter() {
                                    th { key: "{column}", "{column}" }
                                }
                            }
                        }
                        tbody {
                            for row in rows.into_iter() {
                                {render_row(row)}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ListRow {
    index: usize,
    date: String,
    cells: Vec<String>,
    preview: bool,
}

fn table_rows(table: &ReportTable, submitted: usize) -> Vec<ListRow> {
    let scheme = table.schema().edition().catalog().scheme;
    table
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| ListRow {
            index,
            date: record.date_label(),
            cells: record
                .cells
                .iter()
                .map(|cell| format_cell(cell, scheme))
                .collect(),
            preview: index >= submitted,
        })
        .collect()
}

fn render_row(row: ListRow) -> Element {
    let ListRow {
        index,
        date,
        cells,
        preview,
    } = row;
    let class_name = if preview {
        "results-list__row results-list__row--preview"
    } else {
        "results-list__row"
    };
    let date = if date.is_empty() { "–".to_string() } else { date };

    rsx! {
        tr { key: "{index}", class: "{class_name}",
            td { class: "results-list__date",
                "{date}"
                if preview {
                    span { class: "results-list__badge", {t!("results-list-preview")} }
                }
            }
            for (column, cell) in cells.into_iter().enumerate() {
                td { key: "{column}", "{cell}" }
            }
        }
    }
}
