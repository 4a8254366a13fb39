//! Table rows for the two rating documents.
//!
//! Derived fields are computed once per row so sorting compares plain values.
//! Tables build their rows once per loaded document and keep them memoized,
//! so derivation warnings fire once per load rather than per render.

use super::cost::estimated_cost;
use super::derive::{date_from_subfolder, model_short_name, prompt_from_subfolder};
use super::model::{PlotRating, Rating, Score};
use super::table::{SortKey, SortValue, TableRow};

/// One notebook rating with its derived display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookRow {
    pub rating: Rating,
    pub model: String,
    pub prompt: String,
    pub date: String,
    pub estimated_cost: Option<f64>,
}

impl NotebookRow {
    pub fn new(rating: &Rating) -> Self {
        Self {
            model: model_short_name(rating.metadata.as_ref()),
            prompt: prompt_from_subfolder(&rating.subfolder),
            date: date_from_subfolder(&rating.subfolder),
            estimated_cost: estimated_cost(rating),
            rating: rating.clone(),
        }
    }

    pub fn dandiset_id(&self) -> &str {
        &self.rating.dandiset_id
    }

    pub fn subfolder(&self) -> &str {
        &self.rating.subfolder
    }

    pub fn scores(&self) -> &[Score] {
        &self.rating.scores
    }
}

impl TableRow for NotebookRow {
    fn group_key(&self) -> &str {
        self.dandiset_id()
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue<'_>> {
        let value = match key {
            SortKey::DandisetId => SortValue::Text(self.dandiset_id()),
            SortKey::Model => SortValue::Text(&self.model),
            SortKey::Prompt => SortValue::Text(&self.prompt),
            SortKey::Date => SortValue::Text(&self.date),
            SortKey::OverallScore => SortValue::Number(self.rating.overall_score),
            SortKey::EstimatedCost => SortValue::Number(self.estimated_cost.unwrap_or(0.0)),
            SortKey::SubScore(index) => SortValue::Number(
                self.rating
                    .scores
                    .get(index)
                    .map(|s| s.score)
                    .unwrap_or(f64::NEG_INFINITY),
            ),
            SortKey::PlotId | SortKey::QualityScore => return None,
        };
        Some(value)
    }
}

pub fn notebook_rows(ratings: &[Rating]) -> Vec<NotebookRow> {
    ratings.iter().map(NotebookRow::new).collect()
}

/// Sub-score column titles, taken from the first rating.
pub fn score_columns(ratings: &[Rating]) -> Vec<String> {
    ratings
        .first()
        .map(|r| r.scores.iter().map(|s| s.name.clone()).collect())
        .unwrap_or_default()
}

/// One plot of one notebook.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRow {
    pub notebook: String,
    pub subfolder: String,
    pub dandiset_id: String,
    pub model: String,
    pub prompt: String,
    pub date: String,
    pub plot_id: String,
    pub quality_score: f64,
}

impl TableRow for PlotRow {
    fn group_key(&self) -> &str {
        &self.dandiset_id
    }

    fn sort_value(&self, key: SortKey) -> Option<SortValue<'_>> {
        let value = match key {
            SortKey::DandisetId => SortValue::Text(&self.dandiset_id),
            SortKey::Model => SortValue::Text(&self.model),
            SortKey::Prompt => SortValue::Text(&self.prompt),
            SortKey::Date => SortValue::Text(&self.date),
            SortKey::PlotId => SortValue::Text(&self.plot_id),
            SortKey::QualityScore => SortValue::Number(self.quality_score),
            SortKey::OverallScore | SortKey::EstimatedCost | SortKey::SubScore(_) => return None,
        };
        Some(value)
    }
}

/// Expand every plot rating into one row per plot.
///
/// Rows come out in input order: records first, then plots within a record.
pub fn flatten_plot_ratings(plot_ratings: &[PlotRating]) -> Vec<PlotRow> {
    plot_ratings
        .iter()
        .flat_map(|rating| {
            let model = model_short_name(rating.metadata.as_ref());
            let prompt = prompt_from_subfolder(&rating.subfolder);
            let date = date_from_subfolder(&rating.subfolder);

            rating.plots.iter().map(move |plot| PlotRow {
                notebook: rating.notebook.clone(),
                subfolder: rating.subfolder.clone(),
                dandiset_id: rating.dandiset_id.clone(),
                model: model.clone(),
                prompt: prompt.clone(),
                date: date.clone(),
                plot_id: plot.plot_id.clone(),
                quality_score: plot.scores.first().map(|s| s.score).unwrap_or(0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PlotEntry, RatingMetadata};

    fn score(name: &str, value: f64) -> Score {
        Score {
            name: name.into(),
            version: 1,
            score: value,
            reps: Vec::new(),
        }
    }

    fn plot(id: &str, scores: Vec<Score>) -> PlotEntry {
        PlotEntry {
            plot_id: id.into(),
            cell_index: 0,
            output_index: 0,
            scores,
        }
    }

    fn plot_rating(dandiset: &str, plots: Vec<PlotEntry>) -> PlotRating {
        PlotRating {
            notebook: format!("{dandiset}.ipynb"),
            dandiset_id: dandiset.into(),
            subfolder: "2025-04-15-gemini-2.0-flash-001-prompt-f-1".into(),
            plots,
            metadata: Some(RatingMetadata {
                model: Some("google/gemini-2.0-flash-001".into()),
                ..RatingMetadata::default()
            }),
        }
    }

    #[test]
    fn three_plots_become_three_rows() {
        let ratings = vec![plot_rating(
            "000123",
            vec![
                plot("cell_1_output_0", vec![score("quality", 3.0)]),
                plot("cell_2_output_0", vec![score("quality", 2.0)]),
                plot("cell_4_output_1", vec![score("quality", 1.0)]),
            ],
        )];

        let rows = flatten_plot_ratings(&ratings);
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.dandiset_id, "000123");
            assert_eq!(row.subfolder, "2025-04-15-gemini-2.0-flash-001-prompt-f-1");
            assert_eq!(row.model, "gemini-2.0-flash-001");
            assert_eq!(row.prompt, "prompt-f-1");
            assert_eq!(row.date, "2025-04-15");
        }
        let ids: Vec<_> = rows.iter().map(|r| r.plot_id.as_str()).collect();
        assert_eq!(ids, ["cell_1_output_0", "cell_2_output_0", "cell_4_output_1"]);
    }

    #[test]
    fn unscored_plot_has_zero_quality() {
        let rows = flatten_plot_ratings(&[plot_rating("000001", vec![plot("p", Vec::new())])]);
        assert_eq!(rows[0].quality_score, 0.0);
    }

    #[test]
    fn flattening_keeps_record_order() {
        let ratings = vec![
            plot_rating("000002", vec![plot("a", Vec::new()), plot("b", Vec::new())]),
            plot_rating("000001", vec![plot("c", Vec::new())]),
        ];
        let ids: Vec<_> = flatten_plot_ratings(&ratings)
            .into_iter()
            .map(|r| r.plot_id)
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn missing_sub_score_sorts_as_negative_infinity() {
        let rating = Rating {
            notebook: "nb".into(),
            dandiset_id: "000001".into(),
            subfolder: "2025-04-15-x".into(),
            overall_score: 1.0,
            scores: vec![score("a", 2.0)],
            metadata: None,
        };
        let row = NotebookRow::new(&rating);
        assert_eq!(row.sort_value(SortKey::SubScore(0)), Some(SortValue::Number(2.0)));
        assert_eq!(
            row.sort_value(SortKey::SubScore(3)),
            Some(SortValue::Number(f64::NEG_INFINITY))
        );
        assert_eq!(row.sort_value(SortKey::EstimatedCost), Some(SortValue::Number(0.0)));
        assert_eq!(row.estimated_cost, None);
        assert_eq!(row.sort_value(SortKey::PlotId), None);
    }

    #[test]
    fn notebook_rows_outlive_the_document() {
        let rows = {
            let ratings = vec![Rating {
                notebook: "nb".into(),
                dandiset_id: "000123".into(),
                subfolder: "2025-04-15-gpt-4o-prompt-a-1".into(),
                overall_score: 6.0,
                scores: vec![score("a", 2.0)],
                metadata: Some(RatingMetadata {
                    model: Some("openai/gpt-4o".into()),
                    ..RatingMetadata::default()
                }),
            }];
            notebook_rows(&ratings)
        };

        assert_eq!(rows[0].dandiset_id(), "000123");
        assert_eq!(rows[0].model, "gpt-4o");
        assert_eq!(rows[0].prompt, "prompt-a-1");
        assert_eq!(rows[0].scores().len(), 1);
    }

    #[test]
    fn score_columns_follow_first_rating() {
        let rating = Rating {
            notebook: "nb".into(),
            dandiset_id: "000001".into(),
            subfolder: "2025-04-15-x".into(),
            overall_score: 1.0,
            scores: vec![score("clarity", 1.0), score("rigor", 2.0)],
            metadata: None,
        };
        assert_eq!(score_columns(&[rating]), ["clarity", "rigor"]);
        assert!(score_columns(&[]).is_empty());
    }
}
