use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    format::format_score,
    links,
    model::PlotRating,
    rows::{flatten_plot_ratings, PlotRow},
    table::{build_page, SortKey, TableState},
};
use crate::tables::{GroupFilter, Pagination, SortHeader};

/// One row per rated plot, flattened out of the per-notebook records.
#[component]
pub fn PlotRatingsTable(plot_ratings: Rc<Vec<PlotRating>>) -> Element {
    let mut state = use_signal(TableState::default);

    let derived = use_memo(use_reactive(&plot_ratings, |plot_ratings| {
        flatten_plot_ratings(&plot_ratings)
    }));
    let current = state();
    let rows = derived.read();
    let page = build_page(rows.as_slice(), &current);

    let groups = page.groups.clone();
    let page_count = page.page_count;

    let on_sort = EventHandler::new(move |column: SortKey| {
        state.with_mut(|s| s.toggle_sort(column));
    });
    let on_select = EventHandler::new(move |group: String| {
        state.with_mut(|s| s.select_group(&group, &groups));
    });
    let on_previous = EventHandler::new(move |_: ()| state.with_mut(|s| s.previous_page()));
    let on_next = EventHandler::new(move |_: ()| state.with_mut(|s| s.next_page(page_count)));

    let columns = [
        ("Dandiset", SortKey::DandisetId),
        ("Model", SortKey::Model),
        ("Prompt", SortKey::Prompt),
        ("Date", SortKey::Date),
        ("Plot ID", SortKey::PlotId),
        ("Quality Score", SortKey::QualityScore),
    ];

    rsx! {
        div { class: "ratings-table ratings-table--plots",
            div { class: "ratings-table__header",
                h2 { "DANDI AI Notebooks Plot Explorer" }
                span { class: "ratings-table__meta", "{page.total_rows} plots" }
            }

            GroupFilter {
                groups: page.groups.clone(),
                selected: page.selected_group.clone(),
                on_select: on_select,
            }

            div { class: "table-wrapper",
                table {
                    thead {
                        tr {
                            th { span { "Notebook" } }
                            for (label, column) in columns {
                                SortHeader {
                                    key: "{label}",
                                    label: label.to_string(),
                                    column: column,
                                    active: current.sort,
                                    on_sort: on_sort,
                                }
                            }
                        }
                    }
                    tbody {
                        for (index, row) in page.rows.iter().enumerate() {
                            {render_plot_row(row, index)}
                        }
                    }
                }
            }

            Pagination {
                page: page.page,
                page_count: page.page_count,
                on_previous: on_previous,
                on_next: on_next,
            }
        }
    }
}

fn render_plot_row(row: &PlotRow, index: usize) -> Element {
    let notebook_href = links::notebook_url(&row.dandiset_id, &row.subfolder);
    let notebook_label = links::notebook_label(&row.dandiset_id);
    let prompt_href = links::prompt_template_url(&row.prompt);
    let plot_href = links::plot_image_url(&row.dandiset_id, &row.subfolder, &row.plot_id);
    let quality = format_score(row.quality_score);

    rsx! {
        tr { key: "{index}",
            td {
                a {
                    href: "{notebook_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{row.notebook}",
                    "{notebook_label}"
                }
            }
            td { "{row.dandiset_id}" }
            td { "{row.model}" }
            td {
                a {
                    href: "{prompt_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{row.prompt}"
                }
            }
            td { "{row.date}" }
            td {
                a {
                    href: "{plot_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{row.plot_id}"
                }
            }
            td { class: "score-cell", "{quality}" }
        }
    }
}
