//! Assess command implementation.
//!
//! Reads one snapshot (or an array of them) from JSON, or builds a snapshot
//! from inline flags, and prints the assessment.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use finhealth_analytics::AssessmentEngine;
use finhealth_core::numeric::format_number;
use finhealth_core::{AssessmentResult, FinancialSnapshot};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{
    print_error, print_header, print_info, print_json_value, print_output, print_success,
    print_warning, KeyValue,
};

/// Arguments for the assess command.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// JSON file holding a snapshot or an array of snapshots; `-` reads stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Locale for labels (overrides the snapshot's language)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Business name
    #[arg(long, conflicts_with = "input")]
    pub business_name: Option<String>,

    /// Industry, used in the benchmark summary
    #[arg(long, conflicts_with = "input")]
    pub industry: Option<String>,

    /// Region
    #[arg(long, conflicts_with = "input")]
    pub region: Option<String>,

    /// Current-period revenue
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub revenue: f64,

    /// Prior-period revenue
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub prior_revenue: f64,

    /// Operating expenses
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub expenses: f64,

    /// Cost of goods sold
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub cogs: f64,

    /// Accounts receivable
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub receivables: f64,

    /// Accounts payable
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub payables: f64,

    /// Inventory
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub inventory: f64,

    /// Outstanding debt
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub debt: f64,

    /// Cash on hand
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub cash_on_hand: f64,

    /// Monthly cash burn
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub monthly_burn: f64,

    /// Tax liability
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub tax_liability: f64,

    /// Tax deductions
    #[arg(long, default_value_t = 0.0, conflicts_with = "input")]
    pub deductions: f64,
}

/// Execute the assess command.
pub fn execute(args: AssessArgs, format: OutputFormat) -> Result<()> {
    let mut snapshots = load_snapshots(&args)?;
    if let Some(language) = &args.language {
        for snapshot in &mut snapshots {
            snapshot.language.clone_from(language);
        }
    }

    let engine = AssessmentEngine::default();

    if let [snapshot] = snapshots.as_slice() {
        let report = engine.assess(snapshot)?;
        print_report(&engine, snapshot, &report, format)?;
        return Ok(());
    }

    let outcomes = engine.assess_batch(&snapshots);
    let entries: Vec<BatchEntry> = snapshots
        .into_iter()
        .zip(outcomes)
        .map(|(snapshot, outcome)| BatchEntry::new(snapshot.business_name, outcome))
        .collect();
    print_batch(&entries, format)?;

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} snapshots failed validation", entries.len());
    }
    Ok(())
}

// =============================================================================
// INPUT
// =============================================================================

fn load_snapshots(args: &AssessArgs) -> CliResult<Vec<FinancialSnapshot>> {
    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            parse_snapshots(&text, "stdin")
        }
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            parse_snapshots(&text, &path.display().to_string())
        }
        None => inline_snapshot(args).map(|s| vec![s]),
    }
}

/// Parses a single snapshot object or an array of them.
fn parse_snapshots(text: &str, source_name: &str) -> CliResult<Vec<FinancialSnapshot>> {
    let invalid = |reason: String| CliError::InvalidInput {
        source_name: source_name.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };
    if items.is_empty() {
        return Err(invalid("no snapshots found".to_string()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| invalid(format!("entry {i}: {e}")))
        })
        .collect()
}

fn inline_snapshot(args: &AssessArgs) -> CliResult<FinancialSnapshot> {
    if args.business_name.is_none() && args.industry.is_none() && args.region.is_none() {
        return Err(CliError::MissingArgument(
            "--input <FILE>, or inline --business-name, --industry and --region".to_string(),
        ));
    }

    let mut builder = FinancialSnapshot::builder()
        .revenue(args.revenue)
        .prior_revenue(args.prior_revenue)
        .expenses(args.expenses)
        .cogs(args.cogs)
        .receivables(args.receivables)
        .payables(args.payables)
        .inventory(args.inventory)
        .debt(args.debt)
        .cash_on_hand(args.cash_on_hand)
        .monthly_burn(args.monthly_burn)
        .tax_liability(args.tax_liability)
        .deductions(args.deductions);
    if let Some(name) = &args.business_name {
        builder = builder.business_name(name);
    }
    if let Some(industry) = &args.industry {
        builder = builder.industry(industry);
    }
    if let Some(region) = &args.region {
        builder = builder.region(region);
    }

    Ok(builder.build()?)
}

// =============================================================================
// SINGLE REPORT
// =============================================================================

#[derive(Debug, Serialize, Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Insight")]
    insight: String,
}

#[derive(Debug, Serialize, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Insight")]
    insight: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ProductRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Rationale")]
    rationale: String,
}

/// Headline scores, printed on one line in minimal mode.
#[derive(Debug, Serialize, Tabled)]
struct ScoreLine {
    #[tabled(rename = "Risk")]
    risk_score: String,
    #[tabled(rename = "Credit")]
    credit_score: String,
    #[tabled(rename = "Health")]
    health_label: String,
}

impl ScoreLine {
    fn new(report: &AssessmentResult) -> Self {
        Self {
            risk_score: format_number(report.risk_score),
            credit_score: format_number(report.credit_score),
            health_label: report.health_label.clone(),
        }
    }
}

/// A batch entry's scores prefixed with `<business>:`.
#[derive(Debug, Serialize, Tabled)]
struct BatchScoreLine {
    #[tabled(rename = "Business")]
    business: String,
    #[tabled(inline)]
    scores: ScoreLine,
}

fn print_report(
    engine: &AssessmentEngine,
    snapshot: &FinancialSnapshot,
    report: &AssessmentResult,
    format: OutputFormat,
) -> Result<()> {
    let language = snapshot.language.as_str();
    let translations = engine.translations();

    match format {
        OutputFormat::Table => {
            print_header(&format!("Financial Health: {}", snapshot.business_name));
            let summary = vec![
                KeyValue::new(
                    translations.localize("Risk Score", language),
                    format_number(report.risk_score),
                ),
                KeyValue::new(
                    translations.localize("Credit Score", language),
                    format_number(report.credit_score),
                ),
                KeyValue::new("Health", report.health_label.as_str()),
            ];
            print_output(&summary, format)?;

            print_header("Component Scores");
            let components: Vec<ComponentRow> = report
                .component_scores
                .iter()
                .map(|c| ComponentRow {
                    component: c.name.clone(),
                    score: format_number(c.score),
                    insight: c.insight.clone(),
                })
                .collect();
            print_output(&components, format)?;

            print_header("Key Metrics");
            let metrics: Vec<MetricRow> = report
                .metrics
                .iter()
                .map(|m| MetricRow {
                    metric: m.name.clone(),
                    value: format_number(m.value),
                    insight: m.insight.clone(),
                })
                .collect();
            print_output(&metrics, format)?;

            print_header("Risk Alerts");
            if report.risk_alerts.is_empty() {
                print_success("No risk alerts.");
            }
            for alert in &report.risk_alerts {
                print_warning(alert);
            }

            print_header("Recommendations");
            for recommendation in &report.recommendations {
                print_info(recommendation);
            }

            print_header("Financing Products");
            let products: Vec<ProductRow> = report
                .product_recommendations
                .iter()
                .map(|p| ProductRow {
                    product: p.name.clone(),
                    rationale: p.rationale.clone(),
                })
                .collect();
            print_output(&products, format)?;

            print_header("Outlook");
            println!("{}", report.benchmark_summary);
            println!("{}", report.forecast_summary);
            println!("{}", report.narrative);
        }
        OutputFormat::Json => print_json_value(report)?,
        OutputFormat::Csv => {
            let mut rows = vec![
                KeyValue::new("Risk Score", format_number(report.risk_score)),
                KeyValue::new("Credit Score", format_number(report.credit_score)),
                KeyValue::new("Health Label", report.health_label.as_str()),
            ];
            rows.extend(
                report
                    .component_scores
                    .iter()
                    .map(|c| KeyValue::new(format!("{} Score", c.name), format_number(c.score))),
            );
            rows.extend(
                report
                    .metrics
                    .iter()
                    .map(|m| KeyValue::new(m.name.as_str(), format_number(m.value))),
            );
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => print_output(&[ScoreLine::new(report)], format)?,
    }

    Ok(())
}

// =============================================================================
// BATCH REPORT
// =============================================================================

#[derive(Debug, Serialize)]
struct BatchEntry {
    business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    assessment: Option<AssessmentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchEntry {
    fn new(
        business_name: String,
        outcome: finhealth_core::FinhealthResult<AssessmentResult>,
    ) -> Self {
        match outcome {
            Ok(report) => Self {
                business_name,
                assessment: Some(report),
                error: None,
            },
            Err(err) => Self {
                business_name,
                assessment: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct BatchRow {
    #[tabled(rename = "Business")]
    business: String,
    #[tabled(rename = "Risk")]
    risk_score: String,
    #[tabled(rename = "Credit")]
    credit_score: String,
    #[tabled(rename = "Health")]
    health_label: String,
    #[tabled(rename = "Alerts")]
    alerts: usize,
}

impl From<&BatchEntry> for BatchRow {
    fn from(entry: &BatchEntry) -> Self {
        match &entry.assessment {
            Some(report) => Self {
                business: entry.business_name.clone(),
                risk_score: format_number(report.risk_score),
                credit_score: format_number(report.credit_score),
                health_label: report.health_label.clone(),
                alerts: report.risk_alerts.len(),
            },
            None => Self {
                business: entry.business_name.clone(),
                risk_score: "-".to_string(),
                credit_score: "-".to_string(),
                health_label: "invalid".to_string(),
                alerts: 0,
            },
        }
    }
}

fn print_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header("Batch Assessment");
            }
            let rows: Vec<BatchRow> = entries.iter().map(BatchRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json_value(entries)?,
        OutputFormat::Minimal => {
            let lines: Vec<BatchScoreLine> = entries
                .iter()
                .filter_map(|entry| {
                    entry.assessment.as_ref().map(|report| BatchScoreLine {
                        business: format!("{}:", entry.business_name),
                        scores: ScoreLine::new(report),
                    })
                })
                .collect();
            print_output(&lines, format)?;
        }
    }

    for entry in entries {
        if let Some(error) = &entry.error {
            print_error(&format!("{}: {error}", entry.business_name));
        }
    }

    Ok(())
}
