//! Assessment endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use finhealth_core::{AssessmentResult, FinancialSnapshot};

use crate::dto::{BatchAssessRequest, BatchAssessResponse, BatchAssessResult};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Assess a single snapshot.
pub async fn assess(
    State(state): State<AppState>,
    Json(snapshot): Json<FinancialSnapshot>,
) -> ApiResult<Json<AssessmentResult>> {
    let report = state.engine.assess(&snapshot)?;

    tracing::info!(
        business = %snapshot.business_name,
        risk_score = report.risk_score,
        label = %report.health_label,
        "assessment completed"
    );

    Ok(Json(report))
}

/// Assess many snapshots; invalid entries are reported per item.
pub async fn assess_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchAssessRequest>,
) -> ApiResult<Json<BatchAssessResponse>> {
    let max = state.config.max_batch_size;
    if req.snapshots.len() > max {
        return Err(ApiError::BadRequest(format!(
            "batch of {} snapshots exceeds the limit of {max}",
            req.snapshots.len()
        )));
    }

    let engine = Arc::clone(&state.engine);
    let snapshots = req.snapshots;
    let results = tokio::task::spawn_blocking(move || {
        let outcomes = engine.assess_batch(&snapshots);
        snapshots
            .into_iter()
            .zip(outcomes)
            .enumerate()
            .map(|(index, (snapshot, outcome))| match outcome {
                Ok(report) => BatchAssessResult {
                    index,
                    business_name: snapshot.business_name,
                    assessment: Some(report),
                    error: None,
                },
                Err(err) => BatchAssessResult {
                    index,
                    business_name: snapshot.business_name,
                    assessment: None,
                    error: Some(err.to_string()),
                },
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| ApiError::Internal(format!("batch worker failed: {e}")))?;

    let success_count = results.iter().filter(|r| r.assessment.is_some()).count();
    let error_count = results.len() - success_count;

    tracing::info!(success_count, error_count, "batch assessment completed");

    Ok(Json(BatchAssessResponse {
        results,
        success_count,
        error_count,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::config::ServerConfig;
    use crate::dto::BatchAssessResponse;
    use crate::error::ErrorResponse;
    use crate::server::create_router;
    use crate::state::AppState;
    use finhealth_core::AssessmentResult;

    fn create_test_server() -> TestServer {
        TestServer::new(create_router(AppState::default())).unwrap()
    }

    fn reference_body() -> Value {
        json!({
            "business_name": "Reference Co",
            "industry": "Retail",
            "region": "Karnataka",
            "revenue": 100000.0,
            "prior_revenue": 90000.0,
            "expenses": 70000.0,
            "cogs": 40000.0,
            "receivables": 20000.0,
            "payables": 15000.0,
            "inventory": 10000.0,
            "debt": 30000.0,
            "cash_on_hand": 25000.0,
            "monthly_burn": 5000.0,
            "tax_liability": 2000.0,
            "deductions": 1500.0
        })
    }

    #[tokio::test]
    async fn test_assess_reference() {
        let server = create_test_server();

        let response = server.post("/api/v1/assess").json(&reference_body()).await;
        response.assert_status_ok();

        let body: AssessmentResult = response.json();
        assert_eq!(body.credit_score, 82.8);
        assert_eq!(body.risk_score, 17.2);
        assert_eq!(body.health_label, "Strong");
        assert_eq!(body.component_scores.len(), 5);
    }

    #[tokio::test]
    async fn test_assess_hindi() {
        let server = create_test_server();
        let mut request = reference_body();
        request["language"] = json!("hi");

        let body: AssessmentResult = server.post("/api/v1/assess").json(&request).await.json();
        assert_eq!(body.health_label, "मजबूत");
    }

    #[tokio::test]
    async fn test_assess_negative_figure_is_422() {
        let server = create_test_server();
        let mut request = reference_body();
        request["inventory"] = json!(-10.0);

        let response = server.post("/api/v1/assess").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("inventory"));
        assert!(body.error.message.contains("must be greater than or equal to 0"));
    }

    #[tokio::test]
    async fn test_assess_missing_field_rejected() {
        let server = create_test_server();
        let mut request = reference_body();
        request.as_object_mut().unwrap().remove("revenue");

        let response = server.post("/api/v1/assess").json(&request).await;
        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn test_batch_isolates_errors() {
        let server = create_test_server();
        let mut bad = reference_body();
        bad["debt"] = json!(-1.0);
        bad["business_name"] = json!("Broken Books");

        let response = server
            .post("/api/v1/assess/batch")
            .json(&json!({ "snapshots": [reference_body(), bad, reference_body()] }))
            .await;
        response.assert_status_ok();

        let body: BatchAssessResponse = response.json();
        assert_eq!(body.success_count, 2);
        assert_eq!(body.error_count, 1);
        assert_eq!(body.results[1].index, 1);
        assert_eq!(body.results[1].business_name, "Broken Books");
        assert!(body.results[1].error.as_deref().unwrap().contains("debt"));
        assert_eq!(
            body.results[2].assessment.as_ref().unwrap().risk_score,
            17.2
        );
    }

    #[tokio::test]
    async fn test_batch_over_limit() {
        let config = ServerConfig {
            max_batch_size: 1,
            ..ServerConfig::default()
        };
        let server = TestServer::new(create_router(AppState::new(config))).unwrap();

        let response = server
            .post("/api/v1/assess/batch")
            .json(&json!({ "snapshots": [reference_body(), reference_body()] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error.code, "BAD_REQUEST");
    }
}
