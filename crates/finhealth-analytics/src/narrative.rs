//! Narrative generator.
//!
//! Renders the benchmark, forecast and narrative sentences from already-rounded
//! figures.

use finhealth_core::numeric::{format_number, format_thousands, round_dp};

/// Gross margin (%) below which the benchmark sentence suggests improvement.
pub const BENCHMARK_MARGIN_FLOOR: f64 = 28.0;

/// Peer gross-margin band quoted in the benchmark sentence.
pub const BENCHMARK_MARGIN_BAND: &str = "28-35%";

/// Compares gross margin against the peer band for `industry`.
pub fn benchmark_summary(industry: &str, gross_margin: f64) -> String {
    let verdict = if gross_margin < BENCHMARK_MARGIN_FLOOR {
        "room to improve"
    } else {
        "healthy alignment"
    };

    format!(
        "{industry} peers typically show gross margins of {BENCHMARK_MARGIN_BAND}. \
         Your current gross margin is {}%, indicating {verdict}.",
        format_number(gross_margin)
    )
}

/// Describes the revenue trend and the monthly burn.
pub fn forecast_summary(revenue_growth: f64, monthly_burn: f64) -> String {
    let trend = if revenue_growth >= 0.0 {
        "stable"
    } else {
        "softening"
    };

    format!(
        "Projected 6-month revenue trend is {trend} with an estimated monthly burn of {}.",
        format_thousands(monthly_burn)
    )
}

/// One-paragraph summary naming the business, its label and its risk score.
///
/// `health_label` must already be localized; it is lower-cased here. The risk
/// score is shown to one decimal place.
pub fn narrative(business_name: &str, health_label: &str, risk_score: f64) -> String {
    format!(
        "{business_name} shows a {} profile with a risk score of {}. \
         Liquidity and leverage trends suggest targeted working capital and debt \
         optimization steps.",
        health_label.to_lowercase(),
        format_number(round_dp(risk_score, 1))
    )
}
