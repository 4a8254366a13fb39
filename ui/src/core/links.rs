//! Cross-reference links into the notebook repositories on GitHub.

const ORG_URL: &str = "https://github.com/dandi-ai-notebooks";

/// The generated notebook for one run.
pub fn notebook_url(dandiset_id: &str, subfolder: &str) -> String {
    format!("{ORG_URL}/{dandiset_id}/blob/main/{subfolder}/{dandiset_id}.ipynb")
}

/// The prompt template a run was generated from.
pub fn prompt_template_url(prompt: &str) -> String {
    format!("{ORG_URL}/dandi-ai-notebooks-2/blob/main/templates/{prompt}.txt")
}

/// A rendered plot image.
pub fn plot_image_url(dandiset_id: &str, subfolder: &str, plot_id: &str) -> String {
    format!("{ORG_URL}/{dandiset_id}/blob/main/{subfolder}/plot_images/{plot_id}.png")
}

/// Link text for a notebook.
pub fn notebook_label(dandiset_id: &str) -> String {
    format!("{dandiset_id}.ipynb")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_match_repository_layout() {
        assert_eq!(
            notebook_url("000123", "2025-04-15-gpt-4o-prompt-a-1"),
            "https://github.com/dandi-ai-notebooks/000123/blob/main/2025-04-15-gpt-4o-prompt-a-1/000123.ipynb"
        );
        assert_eq!(
            prompt_template_url("prompt-a-1"),
            "https://github.com/dandi-ai-notebooks/dandi-ai-notebooks-2/blob/main/templates/prompt-a-1.txt"
        );
        assert_eq!(
            plot_image_url("000123", "sub", "cell_3_output_0"),
            "https://github.com/dandi-ai-notebooks/000123/blob/main/sub/plot_images/cell_3_output_0.png"
        );
        assert_eq!(notebook_label("000123"), "000123.ipynb");
    }
}
