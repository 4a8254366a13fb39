use dioxus::prelude::*;

use crate::core::format::format_score;
use crate::core::model::Score;
use crate::core::table::{SortConfig, SortKey};

/// Clickable column header showing the active direction.
#[component]
pub fn SortHeader(
    label: String,
    column: SortKey,
    active: SortConfig,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let is_active = active.key == column;
    let arrow = active.direction.arrow();

    rsx! {
        th {
            class: if is_active { "sortable sortable--active" } else { "sortable" },
            onclick: move |_| on_sort.call(column),
            span { "{label}" }
            if is_active {
                span { class: "sortable__arrow", "{arrow}" }
            }
        }
    }
}

/// Single-select dandiset filter. The empty value means "all".
#[component]
pub fn GroupFilter(
    groups: Vec<String>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let current = selected.clone().unwrap_or_default();

    rsx! {
        div { class: "group-filter",
            label {
                class: "group-filter__label",
                r#for: "group-filter-select",
                "Filter by Dandiset ID"
            }
            select {
                id: "group-filter-select",
                class: "group-filter__select",
                value: "{current}",
                onchange: move |evt: FormEvent| on_select.call(evt.value()),
                option { value: "", selected: selected.is_none(), "All Dandisets" }
                for group in groups.iter() {
                    option {
                        key: "{group}",
                        value: "{group}",
                        selected: selected.as_deref() == Some(group.as_str()),
                        "{group}"
                    }
                }
            }
        }
    }
}

/// Previous / next controls, hidden for single-page tables.
#[component]
pub fn Pagination(
    page: usize,
    page_count: usize,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "pagination",
            if page_count > 1 {
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: page <= 1,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                span { class: "pagination__label", "Page {page} of {page_count}" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: page >= page_count,
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
        }
    }
}

/// Aggregate score with a hover list of its repetitions.
#[component]
pub fn ScoreCell(score: Score) -> Element {
    rsx! {
        td { class: "score-cell",
            div { class: "tooltip-wrapper",
                "{format_score(score.score)}"
                div { class: "tooltip-content",
                    for rep in score.reps.iter() {
                        div { key: "{rep.repnum}",
                            strong { "Rep {rep.repnum}:" }
                            " {format_score(rep.score)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "page__status",
            span { class: "spinner", aria_hidden: "true" }
            p { "Loading ratings…" }
        }
    }
}

#[component]
pub fn LoadFailure(message: String) -> Element {
    rsx! {
        div { class: "page__status page__status--error",
            p { class: "page__error", "Failed to load ratings data" }
            p { class: "page__error-detail", "{message}" }
        }
    }
}
