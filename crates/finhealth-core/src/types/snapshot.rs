//! Input snapshot of one business's financial figures.

use serde::{Deserialize, Serialize};

use crate::error::{FinhealthError, FinhealthResult};

/// Locale code used when a snapshot does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A point-in-time snapshot of a business's financial figures.
///
/// Monetary fields are plain non-negative amounts in a single currency. On
/// deserialization, `prior_revenue`, `cogs`, `monthly_burn`, `tax_liability`
/// and `deductions` default to zero and `language` defaults to `"en"`; every
/// other field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Business display name.
    pub business_name: String,

    /// Industry, used in the peer benchmark sentence.
    pub industry: String,

    /// Operating region.
    pub region: String,

    /// Locale code for the localized vocabulary.
    #[serde(default = "default_language")]
    pub language: String,

    /// Revenue for the current period.
    pub revenue: f64,

    /// Revenue for the prior period.
    #[serde(default)]
    pub prior_revenue: f64,

    /// Operating expenses.
    pub expenses: f64,

    /// Cost of goods sold.
    #[serde(default)]
    pub cogs: f64,

    /// Accounts receivable.
    pub receivables: f64,

    /// Accounts payable.
    pub payables: f64,

    /// Inventory on hand.
    pub inventory: f64,

    /// Outstanding debt.
    pub debt: f64,

    /// Cash on hand.
    pub cash_on_hand: f64,

    /// Average monthly cash burn.
    #[serde(default)]
    pub monthly_burn: f64,

    /// Tax liability for the period.
    #[serde(default)]
    pub tax_liability: f64,

    /// Tax deductions available.
    #[serde(default)]
    pub deductions: f64,
}

impl FinancialSnapshot {
    /// Returns a builder for constructing a snapshot in code.
    #[must_use]
    pub fn builder() -> FinancialSnapshotBuilder {
        FinancialSnapshotBuilder::new()
    }

    /// All numeric figures paired with their field names, in declaration order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("revenue", self.revenue),
            ("prior_revenue", self.prior_revenue),
            ("expenses", self.expenses),
            ("cogs", self.cogs),
            ("receivables", self.receivables),
            ("payables", self.payables),
            ("inventory", self.inventory),
            ("debt", self.debt),
            ("cash_on_hand", self.cash_on_hand),
            ("monthly_burn", self.monthly_burn),
            ("tax_liability", self.tax_liability),
            ("deductions", self.deductions),
        ]
    }

    /// Checks that every figure is a finite, non-negative number.
    ///
    /// Returns the first offending field as [`FinhealthError::InvalidInput`].
    pub fn validate(&self) -> FinhealthResult<()> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(FinhealthError::invalid_input(
                    field,
                    format!("must be a finite number, got {value}"),
                ));
            }
            if value < 0.0 {
                return Err(FinhealthError::invalid_input(
                    field,
                    format!("must be greater than or equal to 0, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// Parses a snapshot from JSON and validates it.
    pub fn from_json(json: &str) -> FinhealthResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Builder for [`FinancialSnapshot`].
///
/// Name, industry and region are required. Figures that are never set are zero
/// and the language defaults to `"en"`.
#[derive(Debug, Clone, Default)]
pub struct FinancialSnapshotBuilder {
    business_name: Option<String>,
    industry: Option<String>,
    region: Option<String>,
    language: Option<String>,
    revenue: f64,
    prior_revenue: f64,
    expenses: f64,
    cogs: f64,
    receivables: f64,
    payables: f64,
    inventory: f64,
    debt: f64,
    cash_on_hand: f64,
    monthly_burn: f64,
    tax_liability: f64,
    deductions: f64,
}

macro_rules! figure_setters {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $field(mut self, value: f64) -> Self {
                self.$field = value;
                self
            }
        )*
    };
}

impl FinancialSnapshotBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the business name.
    #[must_use]
    pub fn business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    /// Sets the industry.
    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the locale code.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    figure_setters! {
        /// Sets current-period revenue.
        revenue,
        /// Sets prior-period revenue.
        prior_revenue,
        /// Sets operating expenses.
        expenses,
        /// Sets cost of goods sold.
        cogs,
        /// Sets accounts receivable.
        receivables,
        /// Sets accounts payable.
        payables,
        /// Sets inventory.
        inventory,
        /// Sets outstanding debt.
        debt,
        /// Sets cash on hand.
        cash_on_hand,
        /// Sets monthly burn.
        monthly_burn,
        /// Sets tax liability.
        tax_liability,
        /// Sets deductions.
        deductions,
    }

    /// Builds and validates the snapshot.
    pub fn build(self) -> FinhealthResult<FinancialSnapshot> {
        let snapshot = FinancialSnapshot {
            business_name: self
                .business_name
                .ok_or_else(|| FinhealthError::missing_field("business_name"))?,
            industry: self
                .industry
                .ok_or_else(|| FinhealthError::missing_field("industry"))?,
            region: self
                .region
                .ok_or_else(|| FinhealthError::missing_field("region"))?,
            language: self.language.unwrap_or_else(default_language),
            revenue: self.revenue,
            prior_revenue: self.prior_revenue,
            expenses: self.expenses,
            cogs: self.cogs,
            receivables: self.receivables,
            payables: self.payables,
            inventory: self.inventory,
            debt: self.debt,
            cash_on_hand: self.cash_on_hand,
            monthly_burn: self.monthly_burn,
            tax_liability: self.tax_liability,
            deductions: self.deductions,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}
