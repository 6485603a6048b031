//! The assessment pipeline.
//!
//! Stages run strictly forward: ratios, component scores, classification and
//! rules, then narrative text. No stage reads back from a later one, and the
//! engine holds no mutable state, so one engine can serve any number of
//! concurrent callers.

use finhealth_core::numeric::round2;
use finhealth_core::{AssessmentResult, FinancialSnapshot, FinhealthResult};
use once_cell::sync::Lazy;

use crate::config::EngineConfig;
use crate::localization::Translations;
use crate::narrative::{benchmark_summary, forecast_summary, narrative};
use crate::parallel::maybe_parallel_map;
use crate::ratios::calculate_ratios;
use crate::rules::{
    aggregate_scores, key_metrics, product_recommendations, recommendations, risk_alerts,
};
use crate::scoring::score_components;

static DEFAULT_ENGINE: Lazy<AssessmentEngine> = Lazy::new(AssessmentEngine::default);

/// Stateless assessment engine with its locale tables.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: EngineConfig,
    translations: Translations,
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl AssessmentEngine {
    /// Creates an engine. Locale tables from `config` are layered over the
    /// built-in ones.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let translations = Translations::builtin().clone().merged(&config.locales);
        Self {
            config,
            translations,
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Effective locale tables (built-in plus configured).
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Validates `snapshot` and assesses it.
    ///
    /// Returns [`FinhealthError::InvalidInput`](finhealth_core::FinhealthError::InvalidInput)
    /// for a negative or non-finite figure; the pipeline itself never fails.
    pub fn assess(&self, snapshot: &FinancialSnapshot) -> FinhealthResult<AssessmentResult> {
        snapshot.validate()?;
        Ok(self.assess_unchecked(snapshot))
    }

    /// Assesses a snapshot the caller has already validated.
    #[must_use]
    pub fn assess_unchecked(&self, snapshot: &FinancialSnapshot) -> AssessmentResult {
        let ratios = calculate_ratios(snapshot).rounded();
        let component_scores = score_components(&ratios);
        let summary = aggregate_scores(&component_scores);
        let label = summary.label();

        let language = snapshot.language.as_str();
        if !self.translations.has_locale(language) {
            log::debug!("no locale table for '{language}', using source terms");
        }
        let health_label = self.translations.localize(label.term(), language).to_string();

        let risk_alerts = risk_alerts(&ratios);
        let recommendations = recommendations(&ratios);

        log::debug!(
            "assessed '{}': risk={} credit={} label={} alerts={}",
            snapshot.business_name,
            summary.risk_score,
            summary.credit_score,
            label,
            risk_alerts.len()
        );

        AssessmentResult {
            risk_score: round2(summary.risk_score),
            credit_score: round2(summary.credit_score),
            metrics: key_metrics(&ratios),
            component_scores,
            risk_alerts,
            product_recommendations: product_recommendations(),
            benchmark_summary: benchmark_summary(&snapshot.industry, ratios.gross_margin),
            forecast_summary: forecast_summary(ratios.revenue_growth, snapshot.monthly_burn),
            recommendations,
            narrative: narrative(&snapshot.business_name, &health_label, summary.risk_score),
            health_label,
        }
    }

    /// Assesses many snapshots independently, preserving input order.
    ///
    /// Each entry is validated on its own; an invalid snapshot yields an error
    /// in its slot without affecting the others.
    pub fn assess_batch(
        &self,
        snapshots: &[FinancialSnapshot],
    ) -> Vec<FinhealthResult<AssessmentResult>> {
        log::debug!("assessing batch of {} snapshots", snapshots.len());
        maybe_parallel_map(snapshots, &self.config, |s| self.assess(s))
    }
}

/// Validates and assesses a snapshot with the default engine.
///
/// # Example
///
/// ```rust
/// use finhealth_analytics::assess;
/// use finhealth_core::FinancialSnapshot;
///
/// let snapshot = FinancialSnapshot::builder()
///     .business_name("Apex Traders")
///     .industry("Retail")
///     .region("Maharashtra")
///     .revenue(100_000.0)
///     .prior_revenue(90_000.0)
///     .expenses(70_000.0)
///     .cogs(40_000.0)
///     .receivables(20_000.0)
///     .payables(15_000.0)
///     .inventory(10_000.0)
///     .debt(30_000.0)
///     .cash_on_hand(25_000.0)
///     .build()
///     .unwrap();
///
/// let report = assess(&snapshot).unwrap();
/// assert_eq!(report.health_label, "Strong");
/// assert!(!report.recommendations.is_empty());
/// ```
pub fn assess(snapshot: &FinancialSnapshot) -> FinhealthResult<AssessmentResult> {
    DEFAULT_ENGINE.assess(snapshot)
}

/// Assesses an already validated snapshot with the default engine.
#[must_use]
pub fn assess_unchecked(snapshot: &FinancialSnapshot) -> AssessmentResult {
    DEFAULT_ENGINE.assess_unchecked(snapshot)
}
