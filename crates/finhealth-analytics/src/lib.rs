//! # Finhealth Analytics
//!
//! Rule-based financial-health scoring for a single business snapshot.
//!
//! An assessment runs four forward-only stages:
//!
//! 1. [`ratios`] - nine financial ratios with safe division
//! 2. [`scoring`] - five component scores clamped to `[0, 100]`
//! 3. [`rules`] - risk/credit aggregation, health label, alert and
//!    recommendation rule tables, product suggestions, headline metrics
//! 4. [`narrative`] and [`localization`] - report sentences and the
//!    localized vocabulary
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no shared mutable state, deterministic output
//! - **Fixed contract values**: coefficients and thresholds are constants
//! - **Config-driven batching**: optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use finhealth_analytics::prelude::*;
//!
//! let snapshot = FinancialSnapshot::builder()
//!     .business_name("Apex Traders")
//!     .industry("Retail")
//!     .region("Maharashtra")
//!     .language("hi")
//!     .revenue(1_250_000.0)
//!     .prior_revenue(1_180_000.0)
//!     .expenses(860_000.0)
//!     .cogs(620_000.0)
//!     .receivables(180_000.0)
//!     .payables(140_000.0)
//!     .inventory(220_000.0)
//!     .debt(350_000.0)
//!     .cash_on_hand(90_000.0)
//!     .build()
//!     .unwrap();
//!
//! let report = AssessmentEngine::default().assess(&snapshot).unwrap();
//! assert_eq!(report.component_scores.len(), 5);
//! assert_eq!(report.metrics.len(), 7);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch assessment

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod engine;
pub mod localization;
pub mod narrative;
pub mod parallel;
pub mod ratios;
pub mod rules;
pub mod scoring;

pub use config::EngineConfig;
pub use engine::{assess, assess_unchecked, AssessmentEngine};
pub use localization::{localize, Translations};
pub use ratios::calculate_ratios;
pub use rules::{aggregate_scores, ScoreSummary};
pub use scoring::score_components;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{assess, AssessmentEngine};
    pub use crate::localization::{localize, Translations};
    pub use finhealth_core::prelude::*;
}
