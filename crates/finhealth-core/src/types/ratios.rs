//! The nine financial ratios derived from a snapshot.

use serde::{Deserialize, Serialize};

use crate::numeric::round2;

/// Ratios derived from a [`FinancialSnapshot`](super::FinancialSnapshot).
///
/// Margin, growth and working-capital-cycle fields are percentages
/// (`60.0` means 60%); the rest are plain ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Gross margin (%).
    pub gross_margin: f64,

    /// Net margin (%).
    pub net_margin: f64,

    /// Revenue growth versus the prior period (%).
    pub revenue_growth: f64,

    /// Cash plus receivables over payables.
    pub liquidity_ratio: f64,

    /// Debt over revenue.
    pub leverage_ratio: f64,

    /// Revenue over inventory.
    pub inventory_turnover: f64,

    /// Receivables plus inventory less payables, over revenue (%).
    pub working_capital_cycle: f64,

    /// Debt service coverage ratio.
    pub dscr: f64,

    /// Deductions over tax liability.
    pub tax_coverage: f64,
}

impl RatioSet {
    /// Returns a copy with every ratio rounded to 2 decimal places.
    ///
    /// These are the working values seen by scoring, the rule tables and the
    /// report metrics.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            gross_margin: round2(self.gross_margin),
            net_margin: round2(self.net_margin),
            revenue_growth: round2(self.revenue_growth),
            liquidity_ratio: round2(self.liquidity_ratio),
            leverage_ratio: round2(self.leverage_ratio),
            inventory_turnover: round2(self.inventory_turnover),
            working_capital_cycle: round2(self.working_capital_cycle),
            dscr: round2(self.dscr),
            tax_coverage: round2(self.tax_coverage),
        }
    }

    /// Returns true if every ratio is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.gross_margin,
            self.net_margin,
            self.revenue_growth,
            self.liquidity_ratio,
            self.leverage_ratio,
            self.inventory_turnover,
            self.working_capital_cycle,
            self.dscr,
            self.tax_coverage,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
