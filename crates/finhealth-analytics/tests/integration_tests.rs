//! End-to-end assessment scenarios.

use approx::assert_relative_eq;
use finhealth_analytics::prelude::*;
use finhealth_analytics::rules::DEFAULT_RECOMMENDATION;

// =============================================================================
// FIXTURES
// =============================================================================

fn reference_snapshot() -> FinancialSnapshot {
    FinancialSnapshot::builder()
        .business_name("Reference Co")
        .industry("Retail")
        .region("Karnataka")
        .revenue(100_000.0)
        .prior_revenue(90_000.0)
        .expenses(70_000.0)
        .cogs(40_000.0)
        .receivables(20_000.0)
        .payables(15_000.0)
        .inventory(10_000.0)
        .debt(30_000.0)
        .cash_on_hand(25_000.0)
        .monthly_burn(5_000.0)
        .tax_liability(2_000.0)
        .deductions(1_500.0)
        .build()
        .unwrap()
}

fn apex_traders() -> FinancialSnapshot {
    FinancialSnapshot::builder()
        .business_name("Apex Traders")
        .industry("Retail")
        .region("Maharashtra")
        .revenue(1_250_000.0)
        .prior_revenue(1_180_000.0)
        .expenses(860_000.0)
        .cogs(620_000.0)
        .receivables(180_000.0)
        .payables(140_000.0)
        .inventory(220_000.0)
        .debt(350_000.0)
        .cash_on_hand(90_000.0)
        .monthly_burn(25_000.0)
        .tax_liability(52_000.0)
        .deductions(18_000.0)
        .build()
        .unwrap()
}

fn distressed() -> FinancialSnapshot {
    FinancialSnapshot::builder()
        .business_name("Harbor Fabrication")
        .industry("Manufacturing")
        .region("Gujarat")
        .revenue(100_000.0)
        .prior_revenue(150_000.0)
        .expenses(140_000.0)
        .cogs(90_000.0)
        .receivables(5_000.0)
        .payables(60_000.0)
        .inventory(400_000.0)
        .debt(200_000.0)
        .cash_on_hand(2_000.0)
        .monthly_burn(18_500.0)
        .tax_liability(10_000.0)
        .deductions(500.0)
        .build()
        .unwrap()
}

fn metric(report: &AssessmentResult, name: &str) -> f64 {
    report.metric(name).map(|m| m.value).unwrap()
}

// =============================================================================
// REFERENCE SCENARIO
// =============================================================================

#[test]
fn reference_scenario_ratios_and_label() {
    let report = assess(&reference_snapshot()).unwrap();

    assert_relative_eq!(metric(&report, "Gross Margin (%)"), 60.0);
    assert_relative_eq!(metric(&report, "Net Margin (%)"), 30.0);
    assert_relative_eq!(metric(&report, "Revenue Growth (%)"), 11.11);
    assert_relative_eq!(metric(&report, "Liquidity Ratio"), 3.0);
    assert_relative_eq!(metric(&report, "Leverage Ratio"), 0.3);
    assert_relative_eq!(metric(&report, "Inventory Turnover"), 10.0);
    assert_relative_eq!(metric(&report, "DSCR"), 1.0);

    assert!(!report
        .risk_alerts
        .iter()
        .any(|a| a.contains("liquidity") || a.contains("leverage") || a.contains("contraction")));
    assert_eq!(report.health_label, "Strong");
}

#[test]
fn reference_scenario_component_scores() {
    let report = assess(&reference_snapshot()).unwrap();

    let scores: Vec<(&str, f64)> = report
        .component_scores
        .iter()
        .map(|c| (c.name.as_str(), c.score))
        .collect();

    assert_eq!(
        scores,
        vec![
            ("Liquidity", 100.0),
            ("Profitability", 48.0),
            ("Solvency", 76.0),
            ("Efficiency", 100.0),
            ("Compliance", 90.0),
        ]
    );
    assert_eq!(report.credit_score, 82.8);
    assert_eq!(report.risk_score, 17.2);
}

#[test]
fn reference_scenario_text() {
    let report = assess(&reference_snapshot()).unwrap();

    assert_eq!(
        report.benchmark_summary,
        "Retail peers typically show gross margins of 28-35%. \
         Your current gross margin is 60.0%, indicating healthy alignment."
    );
    assert_eq!(
        report.forecast_summary,
        "Projected 6-month revenue trend is stable with an estimated monthly burn of 5,000."
    );
    assert_eq!(report.product_recommendations.len(), 2);
}

// =============================================================================
// OTHER SCENARIOS
// =============================================================================

#[test]
fn apex_traders_default_recommendation_and_tax_alert() {
    let report = assess(&apex_traders()).unwrap();

    assert_eq!(report.credit_score, 78.86);
    assert_eq!(report.risk_score, 21.14);
    assert_eq!(report.health_label, "Strong");
    assert_eq!(
        report.risk_alerts,
        vec!["Tax coverage appears below optimal levels."]
    );
    assert_eq!(report.recommendations, vec![DEFAULT_RECOMMENDATION]);
    assert_eq!(report.component("Profitability").unwrap().score, 42.72);
    assert_eq!(report.component("Solvency").unwrap().score, 77.6);
    assert_eq!(report.component("Compliance").unwrap().score, 74.0);
    assert!(report.narrative.contains("risk score of 21.1."));
    assert!(report.forecast_summary.ends_with("monthly burn of 25,000."));
    assert!(report.benchmark_summary.contains("50.4%"));
}

#[test]
fn distressed_business_is_high_risk() {
    let report = assess(&distressed()).unwrap();

    assert_eq!(report.credit_score, 27.52);
    assert_eq!(report.risk_score, 72.48);
    assert_eq!(report.health_label, "High Risk");
    assert_eq!(report.risk_alerts.len(), 4);
    assert_eq!(
        report.recommendations,
        vec![
            "Improve gross margin through supplier renegotiation or pricing review.",
            "Increase liquidity by accelerating collections or extending payment terms.",
            "Reduce leverage with debt restructuring or equity infusion.",
            "Boost operating surplus to improve debt-service coverage.",
        ]
    );
    assert!(report.narrative.contains("a high risk profile"));
    assert!(report.narrative.contains("risk score of 72.5."));
    assert!(report.benchmark_summary.contains("10.0%"));
    assert!(report.benchmark_summary.ends_with("room to improve."));
    assert!(report.forecast_summary.contains("softening"));
    assert!(report.forecast_summary.ends_with("18,500."));
}

#[test]
fn distressed_business_in_hindi() {
    let mut snapshot = distressed();
    snapshot.language = "hi".to_string();

    let report = assess(&snapshot).unwrap();
    assert_eq!(report.health_label, "उच्च जोखिम");
    assert!(report.narrative.contains("a उच्च जोखिम profile"));
    // alerts and recommendations stay in the source language
    assert_eq!(report.risk_alerts[0], "Low liquidity coverage detected.");
}

#[test]
fn unknown_language_keeps_english_terms() {
    let mut snapshot = apex_traders();
    snapshot.language = "fr".to_string();

    let report = assess(&snapshot).unwrap();
    assert_eq!(report.health_label, "Strong");
    assert!(report.narrative.contains("a strong profile"));
}

#[test]
fn zero_payables_liquidity_equals_cash_plus_receivables() {
    let mut snapshot = reference_snapshot();
    snapshot.payables = 0.0;

    let report = assess(&snapshot).unwrap();
    assert_relative_eq!(metric(&report, "Liquidity Ratio"), 45_000.0);
    assert_eq!(report.component("Liquidity").unwrap().score, 100.0);
}

#[test]
fn all_zero_figures_are_scored() {
    let snapshot = FinancialSnapshot::builder()
        .business_name("Dormant Ltd")
        .industry("Services")
        .region("Kerala")
        .build()
        .unwrap();

    let report = assess(&snapshot).unwrap();

    // liquidity 0 -> 75, profitability 0, solvency 100, efficiency 100, compliance 60
    assert_eq!(report.credit_score, 67.0);
    assert_eq!(report.risk_score, 33.0);
    assert_eq!(report.health_label, "Strong");
    assert_eq!(
        report.risk_alerts,
        vec![
            "Low liquidity coverage detected.",
            "Tax coverage appears below optimal levels.",
        ]
    );
    assert_eq!(report.recommendations.len(), 3);
    assert!(report.forecast_summary.ends_with("monthly burn of 0."));
}

#[test]
fn huge_liquidity_ratio_rounds_half_even() {
    let snapshot = FinancialSnapshot::builder()
        .business_name("Cash Rich Co")
        .industry("Services")
        .region("Delhi")
        .revenue(100.0)
        .payables(100.0)
        .cash_on_hand(3_989_528_424_845_137.5)
        .build()
        .unwrap();

    let report = assess(&snapshot).unwrap();
    // 39_895_284_248_451.375 is an exact tie
    assert_eq!(metric(&report, "Liquidity Ratio"), 39_895_284_248_451.38);
}

#[test]
fn slightly_negative_gross_margin_reports_negative_zero() {
    let snapshot = FinancialSnapshot::builder()
        .business_name("Thin Margin Co")
        .industry("Retail")
        .region("Punjab")
        .revenue(1_000_000.0)
        .cogs(1_000_010.0)
        .build()
        .unwrap();

    let report = assess(&snapshot).unwrap();
    let gross_margin = metric(&report, "Gross Margin (%)");
    assert_eq!(gross_margin, 0.0);
    assert!(gross_margin.is_sign_negative());
    assert!(report
        .benchmark_summary
        .contains("Your current gross margin is -0.0%"));
    for component in &report.component_scores {
        assert!(component.score.is_sign_positive(), "{}", component.name);
    }
}

#[test]
fn report_round_trips_through_json() {
    let report = assess(&apex_traders()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: AssessmentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn batch_matches_single_assessments() {
    let engine = AssessmentEngine::new(EngineConfig::new().with_threshold(1));
    let snapshots = vec![reference_snapshot(), apex_traders(), distressed()];

    let batch = engine.assess_batch(&snapshots);
    for (snapshot, result) in snapshots.iter().zip(batch) {
        assert_eq!(result.unwrap(), engine.assess(snapshot).unwrap());
    }
}
