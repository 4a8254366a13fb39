//! Formatting helpers for presenting scores and costs.

/// Placeholder for values that cannot be computed.
pub const MISSING: &str = "--";

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Two decimals; unknown and zero costs both show the placeholder.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(value) if value != 0.0 => format!("{value:.2}"),
        _ => MISSING.to_string(),
    }
}
