//! Assessment report types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ComponentScore;

/// Risk-score band below which a business is labelled Strong.
pub const STRONG_BELOW: f64 = 35.0;

/// Risk-score band below which a business is labelled Moderate.
pub const MODERATE_BELOW: f64 = 65.0;

/// Health classification derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthLabel {
    /// Risk score below 35.
    Strong,
    /// Risk score in `[35, 65)`.
    Moderate,
    /// Risk score of 65 or more.
    HighRisk,
}

impl HealthLabel {
    /// Classifies a risk score. Each band includes its lower bound.
    #[must_use]
    pub fn from_risk_score(risk_score: f64) -> Self {
        if risk_score < STRONG_BELOW {
            HealthLabel::Strong
        } else if risk_score < MODERATE_BELOW {
            HealthLabel::Moderate
        } else {
            HealthLabel::HighRisk
        }
    }

    /// English term, also the key into the localization tables.
    #[must_use]
    pub const fn term(self) -> &'static str {
        match self {
            HealthLabel::Strong => "Strong",
            HealthLabel::Moderate => "Moderate",
            HealthLabel::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.term())
    }
}

/// A headline metric with its caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name, e.g. `"Gross Margin (%)"`.
    pub name: String,
    /// Value rounded to 2 decimals.
    pub value: f64,
    /// Caption.
    pub insight: String,
}

impl Metric {
    /// Creates a metric.
    pub fn new(name: impl Into<String>, value: f64, insight: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            insight: insight.into(),
        }
    }
}

/// A financing product suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    /// Product name.
    pub name: String,
    /// Why the product is suggested.
    pub rationale: String,
}

impl ProductRecommendation {
    /// Creates a product recommendation.
    pub fn new(name: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rationale: rationale.into(),
        }
    }
}

/// The financial-health report for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// 100 minus the mean component score, rounded to 2 decimals.
    pub risk_score: f64,

    /// Mean component score, rounded to 2 decimals.
    pub credit_score: f64,

    /// Localized health label.
    pub health_label: String,

    /// Headline metrics, fixed order.
    pub metrics: Vec<Metric>,

    /// Component scores, fixed order.
    pub component_scores: Vec<ComponentScore>,

    /// Triggered risk alerts, possibly empty.
    pub risk_alerts: Vec<String>,

    /// Suggested financing products.
    pub product_recommendations: Vec<ProductRecommendation>,

    /// Peer gross-margin comparison.
    pub benchmark_summary: String,

    /// Revenue trend and burn outlook.
    pub forecast_summary: String,

    /// Action items, never empty.
    pub recommendations: Vec<String>,

    /// One-paragraph summary.
    pub narrative: String,
}

impl AssessmentResult {
    /// Looks up a component score by name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&ComponentScore> {
        self.component_scores.iter().find(|c| c.name == name)
    }

    /// Looks up a metric by name.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Returns true if any risk alert fired.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.risk_alerts.is_empty()
    }
}
