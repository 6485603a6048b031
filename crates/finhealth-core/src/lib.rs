//! # Finhealth Core
//!
//! Core types, errors, and numeric helpers for the Finhealth financial-health
//! assessment engine.
//!
//! This crate provides the building blocks shared by the analytics engine and
//! its outer surfaces (REST API, CLI):
//!
//! - **Types**: [`FinancialSnapshot`] input, [`RatioSet`], [`ComponentScore`],
//!   [`HealthLabel`] and the [`AssessmentResult`] report
//! - **Errors**: [`FinhealthError`] with an `InvalidInput` kind for rejected snapshots
//! - **Numerics**: safe division, score clamping, and presentation rounding
//!
//! ## Example
//!
//! ```rust
//! use finhealth_core::prelude::*;
//!
//! let snapshot = FinancialSnapshot::builder()
//!     .business_name("Apex Traders")
//!     .industry("Retail")
//!     .region("Maharashtra")
//!     .revenue(1_250_000.0)
//!     .expenses(860_000.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(snapshot.language, "en");
//! assert_eq!(safe_divide(10.0, 0.0), 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod numeric;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FinhealthError, FinhealthResult};
    pub use crate::numeric::{clamp_score, round_dp, safe_divide};
    pub use crate::types::{
        AssessmentResult, ComponentKind, ComponentScore, FinancialSnapshot,
        FinancialSnapshotBuilder, HealthLabel, Metric, ProductRecommendation, RatioSet,
    };
}

// Re-export commonly used types at crate root
pub use error::{FinhealthError, FinhealthResult};
pub use types::{
    AssessmentResult, ComponentKind, ComponentScore, FinancialSnapshot, HealthLabel, Metric,
    ProductRecommendation, RatioSet,
};
