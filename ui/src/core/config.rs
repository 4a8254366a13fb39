//! Where the rating documents live and how tables are paged.

/// Rows per table page.
pub const PAGE_SIZE: usize = 1000;

const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/dandi-ai-notebooks/dandi-ai-notebooks-2/refs/heads/main";

/// Locations of the two JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub ratings_url: String,
    pub plot_ratings_url: String,
}

impl SourceConfig {
    /// Both documents under one base URL (no trailing slash).
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            ratings_url: format!("{base}/ratings.json"),
            plot_ratings_url: format!("{base}/plot_ratings.json"),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL)
    }
}
