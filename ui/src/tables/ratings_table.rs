use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    format::{format_cost, format_score},
    links,
    model::Rating,
    rows::{notebook_rows, score_columns, NotebookRow},
    table::{build_page, SortKey, TableState},
};
use crate::tables::{GroupFilter, Pagination, ScoreCell, SortHeader};

/// One row per rated notebook, with a column per sub-score.
#[component]
pub fn RatingsTable(ratings: Rc<Vec<Rating>>) -> Element {
    let mut state = use_signal(TableState::default);

    // Rebuilt only when a new document arrives.
    let derived = use_memo(use_reactive(&ratings, |ratings| {
        notebook_rows(&ratings)
    }));
    let columns = score_columns(&ratings);
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

    let fixed_columns = [
        ("Dandiset", SortKey::DandisetId),
        ("Model", SortKey::Model),
        ("Prompt", SortKey::Prompt),
        ("Date", SortKey::Date),
        ("Overall Score", SortKey::OverallScore),
    ];

    rsx! {
        div { class: "ratings-table",
            div { class: "ratings-table__header",
                h2 { "DANDI AI Notebooks Explorer" }
                span { class: "ratings-table__meta", "{page.total_rows} notebooks" }
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
                            for (label, column) in fixed_columns {
                                SortHeader {
                                    key: "{label}",
                                    label: label.to_string(),
                                    column: column,
                                    active: current.sort,
                                    on_sort: on_sort,
                                }
                            }
                            for (index, name) in columns.iter().enumerate() {
                                SortHeader {
                                    key: "score-{index}",
                                    label: name.clone(),
                                    column: SortKey::SubScore(index),
                                    active: current.sort,
                                    on_sort: on_sort,
                                }
                            }
                            SortHeader {
                                label: "Est. Cost ($)".to_string(),
                                column: SortKey::EstimatedCost,
                                active: current.sort,
                                on_sort: on_sort,
                            }
                        }
                    }
                    tbody {
                        for (index, row) in page.rows.iter().enumerate() {
                            {render_notebook_row(row, index)}
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

fn render_notebook_row(row: &NotebookRow, index: usize) -> Element {
    let dandiset_id = row.dandiset_id().to_string();
    let notebook_href = links::notebook_url(&dandiset_id, row.subfolder());
    let notebook_label = links::notebook_label(&dandiset_id);
    let prompt_href = links::prompt_template_url(&row.prompt);
    let overall = format_score(row.rating.overall_score);
    let cost = format_cost(row.estimated_cost);
    let scores = row.scores().to_vec();

    rsx! {
        tr { key: "{index}",
            td {
                a {
                    href: "{notebook_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{notebook_label}"
                }
            }
            td { "{dandiset_id}" }
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
            td { class: "score-cell", "{overall}" }
            for (position, score) in scores.into_iter().enumerate() {
                ScoreCell { key: "{position}", score: score }
            }
            td { class: "score-cell", "{cost}" }
        }
    }
}
