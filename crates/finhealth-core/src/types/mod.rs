//! Domain types for financial-health assessment.
//!
//! - [`FinancialSnapshot`]: caller-owned figures for one business
//! - [`RatioSet`]: the nine derived ratios
//! - [`ComponentScore`] / [`ComponentKind`]: bounded sub-scores
//! - [`HealthLabel`]: risk band of the aggregate score
//! - [`AssessmentResult`]: the report returned to the caller

mod assessment;
mod ratios;
mod score;
mod snapshot;

pub use assessment::{AssessmentResult, HealthLabel, Metric, ProductRecommendation};
pub use ratios::RatioSet;
pub use score::{ComponentKind, ComponentScore};
pub use snapshot::{FinancialSnapshot, FinancialSnapshotBuilder, DEFAULT_LANGUAGE};
