//! Component scorer.
//!
//! Maps the rounded working ratios to the five component scores. Each raw score
//! is clamped into `[0, 100]` before it is rounded for the report.

use finhealth_core::{ComponentKind, ComponentScore, RatioSet};

/// Liquidity ratio below which coverage counts as weak.
pub const LIQUIDITY_FLOOR: f64 = 1.2;

const LIQUIDITY_PENALTY: f64 = 25.0;
const LIQUIDITY_WEIGHT: f64 = 5.0;
const GROSS_MARGIN_WEIGHT: f64 = 0.6;
const NET_MARGIN_WEIGHT: f64 = 0.4;
const LEVERAGE_WEIGHT: f64 = 80.0;
const TURNOVER_WEIGHT: f64 = 8.0;
const TAX_COVERAGE_WEIGHT: f64 = 40.0;
const COMPLIANCE_BASE: f64 = 60.0;

/// `100 - 25*[liquidity < 1.2] + liquidity*5`, unclamped.
pub fn liquidity_raw(ratios: &RatioSet) -> f64 {
    let penalty = if ratios.liquidity_ratio < LIQUIDITY_FLOOR {
        LIQUIDITY_PENALTY
    } else {
        0.0
    };
    100.0 - penalty + ratios.liquidity_ratio * LIQUIDITY_WEIGHT
}

/// `gross_margin*0.6 + net_margin*0.4`, unclamped.
pub fn profitability_raw(ratios: &RatioSet) -> f64 {
    ratios.gross_margin * GROSS_MARGIN_WEIGHT + ratios.net_margin * NET_MARGIN_WEIGHT
}

/// `100 - leverage*80`, unclamped.
pub fn solvency_raw(ratios: &RatioSet) -> f64 {
    100.0 - ratios.leverage_ratio * LEVERAGE_WEIGHT
}

/// `turnover*8 + (100 - |working_capital_cycle|)`, unclamped.
pub fn efficiency_raw(ratios: &RatioSet) -> f64 {
    ratios.inventory_turnover * TURNOVER_WEIGHT + (100.0 - ratios.working_capital_cycle.abs())
}

/// `tax_coverage*40 + 60`, unclamped.
pub fn compliance_raw(ratios: &RatioSet) -> f64 {
    ratios.tax_coverage * TAX_COVERAGE_WEIGHT + COMPLIANCE_BASE
}

/// Raw (unclamped) score for one component.
pub fn raw_score(kind: ComponentKind, ratios: &RatioSet) -> f64 {
    match kind {
        ComponentKind::Liquidity => liquidity_raw(ratios),
        ComponentKind::Profitability => profitability_raw(ratios),
        ComponentKind::Solvency => solvency_raw(ratios),
        ComponentKind::Efficiency => efficiency_raw(ratios),
        ComponentKind::Compliance => compliance_raw(ratios),
    }
}

/// Scores all five components in report order.
///
/// `ratios` should be the rounded working values from [`RatioSet::rounded`].
#[must_use]
pub fn score_components(ratios: &RatioSet) -> Vec<ComponentScore> {
    ComponentKind::ALL
        .iter()
        .map(|&kind| ComponentScore::new(kind, raw_score(kind, ratios)))
        .collect()
}
