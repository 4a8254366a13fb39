//! Generation cost estimates from token counts.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::model::Rating;

/// Prices in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPrice {
    pub prompt: f64,
    pub completion: f64,
}

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

static PRICES: Lazy<HashMap<&'static str, ModelPrice>> = Lazy::new(|| {
    [
        ("google/gemini-2.0-flash-001", 0.1, 0.4),
        ("openai/gpt-4o", 2.5, 10.0),
        ("anthropic/claude-3.5-sonnet", 3.0, 15.0),
        ("anthropic/claude-3.7-sonnet", 3.0, 15.0),
        ("anthropic/claude-3.7-sonnet:thinking", 3.0, 15.0),
        ("deepseek/deepseek-r1", 0.55, 2.19),
        ("deepseek/deepseek-chat-v3-0324", 0.27, 1.1),
    ]
    .into_iter()
    .map(|(model, prompt, completion)| (model, ModelPrice { prompt, completion }))
    .collect()
});

/// Price for a full `<provider>/<model>` identifier, if known.
pub fn price_for(model: &str) -> Option<ModelPrice> {
    PRICES.get(model).copied()
}

/// Estimated USD cost of generating the rated notebook.
///
/// `None` when the rating carries no metadata or the model is not priced.
pub fn estimated_cost(rating: &Rating) -> Option<f64> {
    let metadata = rating.metadata.as_ref()?;
    let price = price_for(metadata.model.as_deref()?)?;

    let prompt = metadata.prompt_tokens() as f64 / TOKENS_PER_UNIT * price.prompt;
    let completion = metadata.completion_tokens() as f64 / TOKENS_PER_UNIT * price.completion;
    Some(prompt + completion)
}
