//! Component sub-scores.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::{clamp_score, round2};

/// The five components of the aggregate score, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Short-term buffer.
    Liquidity,
    /// Margin strength.
    Profitability,
    /// Debt capacity.
    Solvency,
    /// Working-capital effectiveness.
    Efficiency,
    /// Tax readiness.
    Compliance,
}

impl ComponentKind {
    /// All components in report order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Liquidity,
        ComponentKind::Profitability,
        ComponentKind::Solvency,
        ComponentKind::Efficiency,
        ComponentKind::Compliance,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Liquidity => "Liquidity",
            ComponentKind::Profitability => "Profitability",
            ComponentKind::Solvency => "Solvency",
            ComponentKind::Efficiency => "Efficiency",
            ComponentKind::Compliance => "Compliance",
        }
    }

    /// Fixed caption shown next to the score.
    #[must_use]
    pub const fn insight(self) -> &'static str {
        match self {
            ComponentKind::Liquidity => "Measures short-term buffer.",
            ComponentKind::Profitability => "Margin strength and resilience.",
            ComponentKind::Solvency => "Debt capacity and leverage.",
            ComponentKind::Efficiency => "Working capital effectiveness.",
            ComponentKind::Compliance => "Tax readiness and coverage.",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named component score in `[0, 100]` with its caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    /// Component name.
    pub name: String,

    /// Score in `[0, 100]`, rounded to 2 decimals.
    pub score: f64,

    /// Caption.
    pub insight: String,
}

impl ComponentScore {
    /// Creates a component score from a raw value, clamping then rounding it.
    #[must_use]
    pub fn new(kind: ComponentKind, raw_score: f64) -> Self {
        Self {
            name: kind.name().to_string(),
            score: round2(clamp_score(raw_score)),
            insight: kind.insight().to_string(),
        }
    }
}
