//! Configuration for the assessment engine.

use serde::{Deserialize, Serialize};

use crate::localization::Translations;

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    64
}

/// Configuration for [`AssessmentEngine`](crate::AssessmentEngine).
///
/// Scoring coefficients and thresholds are not configurable; this only controls
/// batch execution and additional locale tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Enable parallel batch assessment (requires the `parallel` feature).
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Extra locale tables, layered over the built-in ones.
    /// A table here replaces a built-in table with the same code.
    #[serde(default)]
    pub locales: Translations,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
            locales: Translations::new(),
        }
    }
}

impl EngineConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always assesses batches sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Adds a locale table.
    #[must_use]
    pub fn with_locale<K, V>(
        mut self,
        code: impl Into<String>,
        terms: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.locales = self.locales.with_locale(code, terms);
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
