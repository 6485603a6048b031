//! Ratio calculator.
//!
//! Derives the nine financial ratios of a [`RatioSet`] from a snapshot. Every
//! quotient goes through [`safe_divide`], so a zero denominator yields the
//! numerator rather than an error or an infinite value.

use finhealth_core::numeric::safe_divide;
use finhealth_core::{FinancialSnapshot, RatioSet};

/// Added to debt and tax liability before dividing by them.
pub const SMOOTHING: f64 = 1.0;

const PERCENT: f64 = 100.0;

/// Calculates the full-precision ratios for a snapshot.
///
/// Margins, growth and the working capital cycle are returned as percentages.
///
/// # Example
///
/// ```rust
/// use finhealth_analytics::calculate_ratios;
/// use finhealth_core::FinancialSnapshot;
///
/// let snapshot = FinancialSnapshot::builder()
///     .business_name("Apex Traders")
///     .industry("Retail")
///     .region("Maharashtra")
///     .revenue(100_000.0)
///     .cogs(40_000.0)
///     .payables(0.0)
///     .cash_on_hand(25_000.0)
///     .receivables(20_000.0)
///     .build()
///     .unwrap();
///
/// let ratios = calculate_ratios(&snapshot);
/// assert_eq!(ratios.gross_margin, 60.0);
/// // zero payables: the numerator passes through unchanged
/// assert_eq!(ratios.liquidity_ratio, 45_000.0);
/// ```
#[must_use]
pub fn calculate_ratios(snapshot: &FinancialSnapshot) -> RatioSet {
    let s = snapshot;

    RatioSet {
        gross_margin: safe_divide(s.revenue - s.cogs, s.revenue) * PERCENT,
        net_margin: safe_divide(s.revenue - s.expenses, s.revenue) * PERCENT,
        revenue_growth: safe_divide(s.revenue - s.prior_revenue, s.prior_revenue) * PERCENT,
        liquidity_ratio: safe_divide(s.cash_on_hand + s.receivables, s.payables),
        leverage_ratio: safe_divide(s.debt, s.revenue),
        inventory_turnover: safe_divide(s.revenue, s.inventory),
        working_capital_cycle: safe_divide(s.receivables + s.inventory - s.payables, s.revenue)
            * PERCENT,
        dscr: safe_divide(s.revenue - s.expenses, s.debt + SMOOTHING),
        tax_coverage: safe_divide(s.deductions, s.tax_liability + SMOOTHING),
    }
}
