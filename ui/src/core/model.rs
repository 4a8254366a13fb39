//! Rating documents as published by the notebook rating runs.
//!
//! Both documents are JSON arrays; these types mirror one element each. Only
//! `metadata` (and the informational fields inside it) may be absent.

use serde::{Deserialize, Serialize};

/// Evaluation record for one generated notebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub notebook: String,
    pub dandiset_id: String,
    pub subfolder: String,
    pub overall_score: f64,
    pub scores: Vec<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RatingMetadata>,
}

/// A named sub-metric: the aggregate plus the repetitions it was built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub name: String,
    pub version: i64,
    pub score: f64,
    pub reps: Vec<Rep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rep {
    pub score: f64,
    pub thinking: String,
    pub repnum: i64,
}

/// Evaluation record for the plots produced by one notebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotRating {
    pub notebook: String,
    pub dandiset_id: String,
    pub subfolder: String,
    pub plots: Vec<PlotEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RatingMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotEntry {
    pub plot_id: String,
    pub cell_index: i64,
    pub output_index: i64,
    pub scores: Vec<Score>,
}

/// Generation metadata written next to each notebook.
///
/// `model` has the form `<provider>/<model-name>`. Token counters that are
/// missing from older documents read as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RatingMetadata {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vision_model: Option<String>,
    #[serde(default)]
    pub dandi_notebook_gen_version: Option<String>,
    #[serde(default)]
    pub system_info: Option<SystemInfo>,
    #[serde(default)]
    pub total_prompt_tokens: u64,
    #[serde(default)]
    pub total_completion_tokens: u64,
    #[serde(default)]
    pub total_vision_prompt_tokens: u64,
    #[serde(default)]
    pub total_vision_completion_tokens: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub elapsed_time_seconds: Option<f64>,
}

impl RatingMetadata {
    /// Prompt tokens across text and vision calls.
    pub fn prompt_tokens(&self) -> u64 {
        self.total_prompt_tokens
            .saturating_add(self.total_vision_prompt_tokens)
    }

    /// Completion tokens across text and vision calls.
    pub fn completion_tokens(&self) -> u64 {
        self.total_completion_tokens
            .saturating_add(self.total_vision_completion_tokens)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SystemInfo {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub processor: String,
    #[serde(default)]
    pub python_version: String,
}
