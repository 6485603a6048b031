//! Classifier and rule engine.
//!
//! Aggregates component scores into the risk/credit pair, classifies the risk
//! band, and evaluates the fixed-order alert and recommendation rule tables.
//!
//! Every rule is a `(predicate, message)` pair. Tables are evaluated top to
//! bottom and every matching message is collected, so output order is the
//! table order.

use std::fmt;

use finhealth_core::numeric::round2;
use finhealth_core::{ComponentScore, HealthLabel, Metric, ProductRecommendation, RatioSet};

use crate::scoring::LIQUIDITY_FLOOR;

/// Leverage ratio above which exposure counts as high.
pub const LEVERAGE_CEILING: f64 = 0.6;

/// Tax coverage below which readiness counts as weak.
pub const TAX_COVERAGE_FLOOR: f64 = 0.5;

/// Gross margin (%) below which margin advice is given.
pub const GROSS_MARGIN_FLOOR: f64 = 25.0;

/// DSCR below which debt-service advice is given.
pub const DSCR_FLOOR: f64 = 1.1;

/// A single rule: fires `message` when `predicate` holds for the working ratios.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Condition on the rounded working ratios.
    pub predicate: fn(&RatioSet) -> bool,
    /// Text emitted when the rule fires.
    pub message: &'static str,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

impl Rule {
    /// Returns true if the rule fires for `ratios`.
    #[inline]
    pub fn fires(&self, ratios: &RatioSet) -> bool {
        (self.predicate)(ratios)
    }
}

fn low_liquidity(r: &RatioSet) -> bool {
    r.liquidity_ratio < LIQUIDITY_FLOOR
}

fn high_leverage(r: &RatioSet) -> bool {
    r.leverage_ratio > LEVERAGE_CEILING
}

fn revenue_contraction(r: &RatioSet) -> bool {
    r.revenue_growth < 0.0
}

fn weak_tax_coverage(r: &RatioSet) -> bool {
    r.tax_coverage < TAX_COVERAGE_FLOOR
}

fn thin_gross_margin(r: &RatioSet) -> bool {
    r.gross_margin < GROSS_MARGIN_FLOOR
}

fn weak_debt_service(r: &RatioSet) -> bool {
    r.dscr < DSCR_FLOOR
}

/// Risk alert rules, in report order.
pub static ALERT_RULES: [Rule; 4] = [
    Rule {
        predicate: low_liquidity,
        message: "Low liquidity coverage detected.",
    },
    Rule {
        predicate: high_leverage,
        message: "High leverage exposure relative to revenue.",
    },
    Rule {
        predicate: revenue_contraction,
        message: "Revenue contraction compared to prior period.",
    },
    Rule {
        predicate: weak_tax_coverage,
        message: "Tax coverage appears below optimal levels.",
    },
];

/// Recommendation rules, in report order.
pub static RECOMMENDATION_RULES: [Rule; 4] = [
    Rule {
        predicate: thin_gross_margin,
        message: "Improve gross margin through supplier renegotiation or pricing review.",
    },
    Rule {
        predicate: low_liquidity,
        message: "Increase liquidity by accelerating collections or extending payment terms.",
    },
    Rule {
        predicate: high_leverage,
        message: "Reduce leverage with debt restructuring or equity infusion.",
    },
    Rule {
        predicate: weak_debt_service,
        message: "Boost operating surplus to improve debt-service coverage.",
    },
];

/// Emitted alone when no recommendation rule fires.
pub const DEFAULT_RECOMMENDATION: &str =
    "Maintain current discipline and invest in growth initiatives.";

/// Collects the messages of every rule in `rules` that fires, in table order.
pub fn evaluate(rules: &[Rule], ratios: &RatioSet) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.fires(ratios))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Triggered risk alerts. May be empty.
#[must_use]
pub fn risk_alerts(ratios: &RatioSet) -> Vec<String> {
    evaluate(&ALERT_RULES, ratios)
}

/// Triggered recommendations, falling back to [`DEFAULT_RECOMMENDATION`]. Never empty.
#[must_use]
pub fn recommendations(ratios: &RatioSet) -> Vec<String> {
    let mut fired = evaluate(&RECOMMENDATION_RULES, ratios);
    if fired.is_empty() {
        fired.push(DEFAULT_RECOMMENDATION.to_string());
    }
    fired
}

/// Aggregate risk and credit scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// `round2(100 - mean)`.
    pub risk_score: f64,
    /// `round2(mean)`.
    pub credit_score: f64,
}

impl ScoreSummary {
    /// Health band of the risk score.
    #[must_use]
    pub fn label(&self) -> HealthLabel {
        HealthLabel::from_risk_score(self.risk_score)
    }
}

/// Aggregates component scores into risk and credit scores.
///
/// Both are derived from the same mean and rounded independently, so their sum
/// is 100 only up to rounding. An empty slice scores as a mean of zero.
#[must_use]
pub fn aggregate_scores(components: &[ComponentScore]) -> ScoreSummary {
    let mean = if components.is_empty() {
        0.0
    } else {
        components.iter().map(|c| c.score).sum::<f64>() / components.len() as f64
    };

    ScoreSummary {
        risk_score: round2(100.0 - mean),
        credit_score: round2(mean),
    }
}

/// The seven headline metrics, in report order.
#[must_use]
pub fn key_metrics(ratios: &RatioSet) -> Vec<Metric> {
    vec![
        Metric::new(
            "Gross Margin (%)",
            ratios.gross_margin,
            "Measures profitability after direct costs.",
        ),
        Metric::new(
            "Net Margin (%)",
            ratios.net_margin,
            "Tracks profit after operating expenses.",
        ),
        Metric::new(
            "Revenue Growth (%)",
            ratios.revenue_growth,
            "Compares revenue to prior period.",
        ),
        Metric::new(
            "Liquidity Ratio",
            ratios.liquidity_ratio,
            "Ability to cover short-term obligations.",
        ),
        Metric::new(
            "Leverage Ratio",
            ratios.leverage_ratio,
            "Debt load relative to revenue.",
        ),
        Metric::new(
            "Inventory Turnover",
            ratios.inventory_turnover,
            "Inventory efficiency signal.",
        ),
        Metric::new("DSCR", ratios.dscr, "Debt service coverage ratio."),
    ]
}

/// Suggested financing products.
///
/// Currently the same pair for every snapshot.
#[must_use]
pub fn product_recommendations() -> Vec<ProductRecommendation> {
    vec![
        ProductRecommendation::new(
            "Working Capital Loan",
            "Suitable if liquidity is below target and receivables are high.",
        ),
        ProductRecommendation::new(
            "Invoice Discounting",
            "Releases cash tied in receivables to improve cash flow cycle.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use finhealth_core::ComponentKind;

    fn healthy_ratios() -> RatioSet {
        RatioSet {
            gross_margin: 60.0,
            net_margin: 30.0,
            revenue_growth: 11.11,
            liquidity_ratio: 3.0,
            leverage_ratio: 0.3,
            inventory_turnover: 10.0,
            working_capital_cycle: 15.0,
            dscr: 2.0,
            tax_coverage: 0.75,
        }
    }

    fn components(scores: [f64; 5]) -> Vec<ComponentScore> {
        ComponentKind::ALL
            .iter()
            .zip(scores)
            .map(|(&kind, score)| ComponentScore::new(kind, score))
            .collect()
    }

    #[test]
    fn test_no_alerts_for_healthy_ratios() {
        assert!(risk_alerts(&healthy_ratios()).is_empty());
    }

    #[test]
    fn test_all_alerts_in_order() {
        let ratios = RatioSet {
            liquidity_ratio: 0.8,
            leverage_ratio: 0.9,
            revenue_growth: -5.0,
            tax_coverage: 0.1,
            ..healthy_ratios()
        };

        assert_eq!(
            risk_alerts(&ratios),
            vec![
                "Low liquidity coverage detected.",
                "High leverage exposure relative to revenue.",
                "Revenue contraction compared to prior period.",
                "Tax coverage appears below optimal levels.",
            ]
        );
    }

    #[test]
    fn test_alert_thresholds_are_strict() {
        let ratios = RatioSet {
            liquidity_ratio: 1.2,
            leverage_ratio: 0.6,
            revenue_growth: 0.0,
            tax_coverage: 0.5,
            ..healthy_ratios()
        };
        assert!(risk_alerts(&ratios).is_empty());
    }

    #[test]
    fn test_default_recommendation_alone() {
        assert_eq!(
            recommendations(&healthy_ratios()),
            vec![DEFAULT_RECOMMENDATION.to_string()]
        );
    }

    #[test]
    fn test_recommendations_in_order_without_default() {
        let ratios = RatioSet {
            gross_margin: 20.0,
            liquidity_ratio: 1.0,
            leverage_ratio: 0.7,
            dscr: 0.5,
            ..healthy_ratios()
        };

        let recs = recommendations(&ratios);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].starts_with("Improve gross margin"));
        assert!(recs[1].starts_with("Increase liquidity"));
        assert!(recs[2].starts_with("Reduce leverage"));
        assert!(recs[3].starts_with("Boost operating surplus"));
        assert!(!recs.iter().any(|r| r == DEFAULT_RECOMMENDATION));
    }

    #[test]
    fn test_single_dscr_recommendation() {
        let ratios = RatioSet {
            dscr: 1.0,
            ..healthy_ratios()
        };
        assert_eq!(
            recommendations(&ratios),
            vec!["Boost operating surplus to improve debt-service coverage."]
        );
    }

    #[test]
    fn test_aggregate_scores() {
        let summary = aggregate_scores(&components([100.0, 48.0, 76.0, 100.0, 90.0]));
        assert_eq!(summary.credit_score, 82.8);
        assert_eq!(summary.risk_score, 17.2);
        assert_eq!(summary.label(), HealthLabel::Strong);
    }

    #[test]
    fn test_aggregate_scores_rounding_independent() {
        let summary = aggregate_scores(&components([33.33, 33.33, 33.34, 50.01, 0.0]));
        assert!((summary.risk_score + summary.credit_score - 100.0).abs() <= 0.05);
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = aggregate_scores(&[]);
        assert_eq!(summary.credit_score, 0.0);
        assert_eq!(summary.risk_score, 100.0);
        assert_eq!(summary.label(), HealthLabel::HighRisk);
    }

    #[test]
    fn test_key_metrics_order() {
        let names: Vec<_> = key_metrics(&healthy_ratios())
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(
            names,
            [
                "Gross Margin (%)",
                "Net Margin (%)",
                "Revenue Growth (%)",
                "Liquidity Ratio",
                "Leverage Ratio",
                "Inventory Turnover",
                "DSCR",
            ]
        );
    }

    #[test]
    fn test_product_recommendations_static_pair() {
        let products = product_recommendations();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Working Capital Loan");
        assert_eq!(products[1].name, "Invoice Discounting");
    }
}
