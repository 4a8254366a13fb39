//! Filter / sort / paginate pipeline behind both rating tables.
//!
//! The whole table is a pure function of the loaded rows and a [`TableState`]:
//! [`build_page`] enumerates the dandiset groups, applies the group filter,
//! sorts stably by the selected column and slices out the requested page.
//! Components own a `TableState` signal and call back into its transition
//! methods; nothing else is mutable.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use once_cell::sync::Lazy;

use super::config::PAGE_SIZE;

/// Columns a table can be sorted by.
///
/// Not every key applies to every row type; rows report `None` for keys they
/// do not carry and then compare equal, leaving input order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    DandisetId,
    Model,
    Prompt,
    Date,
    OverallScore,
    QualityScore,
    EstimatedCost,
    PlotId,
    /// Sub-metric column, by position in `Rating::scores`.
    SubScore(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest runs first.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

/// A sortable cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Row types the pipeline can operate on.
pub trait TableRow {
    /// The dandiset id used by the group filter.
    fn group_key(&self) -> &str;

    /// Extract the value for `key`, or `None` if the row has no such column.
    fn sort_value(&self, key: SortKey) -> Option<SortValue<'_>>;
}

// Root locale, tertiary strength, punctuation not ignored.
static COLLATOR: Lazy<Option<CollatorBorrowed<'static>>> = Lazy::new(|| {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(%err, "root collator unavailable, text columns sort by code point");
            None
        }
    }
});

/// Unicode collation in the root locale: punctuation before digits before
/// letters, case only breaking ties (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Distinct group ids in ascending ordinal order.
pub fn group_keys<R: TableRow>(rows: &[R]) -> Vec<String> {
    rows.iter()
        .map(|row| row.group_key())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Rows belonging to `group`, or every row when no group is selected.
pub fn filter_rows<'a, R: TableRow>(rows: &'a [R], group: Option<&str>) -> Vec<&'a R> {
    match group {
        None => rows.iter().collect(),
        Some(group) => rows.iter().filter(|row| row.group_key() == group).collect(),
    }
}

/// Stable sort by `sort.key`. Values are extracted once per row.
pub fn sort_rows<'a, R: TableRow>(rows: &mut Vec<&'a R>, sort: SortConfig) {
    let mut keyed: Vec<(Option<SortValue<'a>>, &'a R)> = rows
        .drain(..)
        .map(|row| (row.sort_value(sort.key), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = match (a, b) {
            (Some(a), Some(b)) => a.compare(b),
            _ => Ordering::Equal,
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    *rows = keyed.into_iter().map(|(_, row)| row).collect();
}

/// `ceil(total / page_size)`; zero rows means zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The rows of 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Interactive state of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub selected_group: Option<String>,
    pub sort: SortConfig,
    pub current_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(SortConfig::default())
    }
}

impl TableState {
    pub fn new(sort: SortConfig) -> Self {
        Self {
            selected_group: None,
            sort,
            current_page: 1,
        }
    }

    /// Header click: flip the active column, otherwise sort ascending by `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = if self.sort.key == key {
            SortConfig {
                key,
                direction: self.sort.direction.flipped(),
            }
        } else {
            SortConfig {
                key,
                direction: SortDirection::Asc,
            }
        };
        self.current_page = 1;
    }

    /// Select a group from the filter control. Empty or unknown ids clear it.
    pub fn select_group(&mut self, group: &str, known: &[String]) {
        self.selected_group = known.iter().find(|g| g.as_str() == group).cloned();
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize, page_count: usize) {
        self.current_page = page.clamp(1, page_count.max(1));
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        self.set_page(self.current_page.saturating_add(1), page_count);
    }
}

/// Everything a table component needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a, R> {
    pub rows: Vec<&'a R>,
    pub groups: Vec<String>,
    /// The selection actually applied; stale selections resolve to `None`.
    pub selected_group: Option<String>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl<R> TablePage<'_, R> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Run the pipeline with the default page size.
pub fn build_page<'a, R: TableRow>(rows: &'a [R], state: &TableState) -> TablePage<'a, R> {
    build_page_with_size(rows, state, PAGE_SIZE)
}

pub fn build_page_with_size<'a, R: TableRow>(
    rows: &'a [R],
    state: &TableState,
    page_size: usize,
) -> TablePage<'a, R> {
    let groups = group_keys(rows);
    let selected_group = state
        .selected_group
        .as_ref()
        .filter(|group| groups.contains(group))
        .cloned();

    let mut visible = filter_rows(rows, selected_group.as_deref());
    sort_rows(&mut visible, state.sort);

    let total_rows = visible.len();
    let page_count = page_count(total_rows, page_size);
    let page = state.current_page.clamp(1, page_count.max(1));
    let rows = paginate(&visible, page, page_size).to_vec();

    TablePage {
        rows,
        groups,
        selected_group,
        page,
        page_count,
        total_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        group: &'static str,
        name: &'static str,
        value: f64,
    }

    impl TableRow for Row {
        fn group_key(&self) -> &str {
            self.group
        }

        fn sort_value(&self, key: SortKey) -> Option<SortValue<'_>> {
            match key {
                SortKey::Model => Some(SortValue::Text(self.name)),
                SortKey::OverallScore => Some(SortValue::Number(self.value)),
                _ => None,
            }
        }
    }

    fn row(group: &'static str, name: &'static str, value: f64) -> Row {
        Row { group, name, value }
    }

    fn names<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
        assert_eq!(locale_compare("", "x"), Ordering::Less);
    }

    #[test]
    fn locale_compare_puts_punctuation_before_digits() {
        assert_eq!(locale_compare("cell_1_output_0", "cell_10_output_0"), Ordering::Less);
        assert_eq!(locale_compare("prompt-a", "prompt1"), Ordering::Less);
        assert_eq!(locale_compare("a_b", "a-b"), Ordering::Less);
        assert_eq!(locale_compare("claude-3.7", "Claude-3.7"), Ordering::Less);
    }

    #[test]
    fn plot_ids_sort_like_the_browser() {
        let rows = vec![
            row("000001", "cell_10_output_0", 0.0),
            row("000001", "cell_1_output_0", 0.0),
            row("000001", "cell_2_output_0", 0.0),
            row("000001", "cell_1-output_0", 0.0),
        ];
        let mut visible = filter_rows(&rows, None);
        sort_rows(
            &mut visible,
            SortConfig {
                key: SortKey::Model,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(
            names(&visible),
            ["cell_1_output_0", "cell_1-output_0", "cell_10_output_0", "cell_2_output_0"]
        );
    }

    #[test]
    fn groups_are_distinct_and_ordinal() {
        let rows = vec![row("000200", "a", 0.0), row("000010", "b", 0.0), row("000200", "c", 0.0)];
        assert_eq!(group_keys(&rows), ["000010", "000200"]);
    }

    #[test]
    fn toggle_flips_active_key() {
        let mut state = TableState::default();
        assert_eq!(state.sort.direction, SortDirection::Desc);

        state.toggle_sort(SortKey::Date);
        assert_eq!(state.sort.direction, SortDirection::Asc);
        state.toggle_sort(SortKey::Date);
        assert_eq!(state.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn new_key_sorts_ascending_from_page_one() {
        let mut state = TableState::default();
        state.current_page = 3;
        state.toggle_sort(SortKey::Model);
        assert_eq!(
            state.sort,
            SortConfig {
                key: SortKey::Model,
                direction: SortDirection::Asc
            }
        );
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn unknown_group_selection_clears_filter() {
        let known = vec!["000001".to_string()];
        let mut state = TableState::default();
        state.select_group("000001", &known);
        assert_eq!(state.selected_group.as_deref(), Some("000001"));
        state.select_group("999999", &known);
        assert_eq!(state.selected_group, None);
        state.select_group("", &known);
        assert_eq!(state.selected_group, None);
    }

    #[test]
    fn stale_selection_is_ignored_by_pipeline() {
        let rows = vec![row("000001", "a", 1.0), row("000002", "b", 2.0)];
        let state = TableState {
            selected_group: Some("000404".into()),
            ..TableState::default()
        };
        let page = build_page(&rows, &state);
        assert_eq!(page.selected_group, None);
        assert_eq!(page.total_rows, 2);
    }

    #[test]
    fn numeric_sort_handles_negative_infinity_ties() {
        let rows = vec![
            row("g", "first", f64::NEG_INFINITY),
            row("g", "mid", 1.0),
            row("g", "second", f64::NEG_INFINITY),
        ];
        let mut visible = filter_rows(&rows, None);
        sort_rows(
            &mut visible,
            SortConfig {
                key: SortKey::OverallScore,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(names(&visible), ["mid", "first", "second"]);
    }

    #[test]
    fn inapplicable_key_keeps_input_order() {
        let rows = vec![row("g", "b", 2.0), row("g", "a", 1.0)];
        let mut visible = filter_rows(&rows, None);
        sort_rows(
            &mut visible,
            SortConfig {
                key: SortKey::PlotId,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(names(&visible), ["b", "a"]);
    }

    #[test]
    fn paginate_slices_and_counts() {
        let data: Vec<usize> = (0..25).collect();
        assert_eq!(page_count(data.len(), 10), 3);
        assert_eq!(paginate(&data, 1, 10), &data[0..10]);
        assert_eq!(paginate(&data, 3, 10), &data[20..25]);
        assert!(paginate(&data, 4, 10).is_empty());
        assert!(paginate(&data, 0, 10).len() == 10);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let rows: Vec<Row> = Vec::new();
        let page = build_page(&rows, &TableState::default());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn page_requests_are_clamped() {
        let rows: Vec<Row> = (0..5).map(|_| row("g", "x", 0.0)).collect();
        let state = TableState {
            current_page: 9,
            ..TableState::default()
        };
        let page = build_page_with_size(&rows, &state, 2);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.rows.len(), 1);

        let mut state = TableState::default();
        state.next_page(3);
        state.next_page(3);
        state.next_page(3);
        assert_eq!(state.current_page, 3);
        state.previous_page();
        assert_eq!(state.current_page, 2);
        state.set_page(0, 3);
        assert_eq!(state.current_page, 1);
    }
}
