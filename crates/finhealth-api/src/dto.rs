//! Data Transfer Objects for API requests and responses.

use std::collections::BTreeMap;

use finhealth_core::{AssessmentResult, FinancialSnapshot};
use serde::{Deserialize, Serialize};

/// Batch assessment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAssessRequest {
    /// Snapshots to assess.
    pub snapshots: Vec<FinancialSnapshot>,
}

/// Batch assessment result for a single snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAssessResult {
    pub index: usize,
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AssessmentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch assessment response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAssessResponse {
    pub results: Vec<BatchAssessResult>,
    pub success_count: usize,
    pub error_count: usize,
}

/// Known locales and the localizable vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalesResponse {
    pub vocabulary: Vec<String>,
    pub locales: BTreeMap<String, BTreeMap<String, String>>,
}
