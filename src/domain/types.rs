//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring and ranking
//! - exported to CSV/JSON
//! - reloaded later by downstream consumers

use serde::{Deserialize, Serialize};

/// One customer row from the input dataset.
///
/// `name` and `age` are display-only passthrough fields: they are echoed into
/// report rows exactly as ingested and never validated numerically.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub name: Option<String>,
    pub age: Option<String>,

    /// Plan identifier the customer is currently subscribed to.
    pub current_plan: String,

    pub monthly_usage_gb: f64,
    pub monthly_calls_min: f64,
    pub monthly_sms: f64,

    /// Entitlements of the current plan as recorded on this row. Catalog
    /// derivation medians these per plan; individual rows may disagree.
    pub data_limit_gb: f64,
    pub call_limit_min: f64,
    pub sms_limit: f64,

    /// Amount actually paid per month, in currency units.
    pub monthly_bill: f64,
}

/// One derived catalog entry.
///
/// Plan attributes are the per-plan **medians** of the subscriber rows, so the
/// catalog reflects what subscribers actually have rather than an external
/// price list. The catalog is rebuilt fresh from the dataset on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: String,
    pub data_limit_gb: f64,
    pub call_limit_min: f64,
    pub sms_limit: f64,
    pub plan_price: f64,
}

/// Per-resource utilization and fit sub-metrics for one (customer, plan) pair.
///
/// All values are rounded to 3 decimals; see `engine::score::round3`.
#[derive(Debug, Clone, Copy)]
pub struct FitDiagnostics {
    /// `monthly_usage_gb / data_limit_gb` (1.0 = using exactly the entitlement).
    pub data_util: f64,
    pub call_util: f64,
    pub sms_util: f64,
    /// Mean of the three per-resource fit values, in `[0, 1]`.
    pub usage_fit: f64,
    /// 1.0 at or below current spend, decaying as the plan gets pricier.
    pub cost_fit: f64,
}

/// A scored (customer, plan) candidate, consumed immediately by ranking.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub plan: PlanRecord,
    /// Composite fit rating in `[0, 5]`, rounded to 3 decimals.
    pub score: f64,
    pub diagnostics: FitDiagnostics,
}

/// One bulk-report row: a customer paired with one ranked recommendation.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub customer_id: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub current_plan: String,
    pub monthly_usage_gb: f64,
    pub monthly_calls_min: f64,
    pub monthly_sms: f64,
    pub monthly_bill: f64,

    pub recommended_plan_id: String,
    pub recommended_plan_price: f64,
    pub recommended_plan_data_limit_gb: f64,
    pub recommended_plan_call_limit_min: f64,
    pub recommended_plan_sms_limit: f64,

    pub recommendation_score: f64,
    pub data_util: f64,
    pub call_util: f64,
    pub sms_util: f64,
}

/// A saved catalog file (JSON).
///
/// This is a snapshot document of the derived catalog, not an independent
/// store: rebuilding from the same dataset yields the same contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub tool: String,
    /// Number of customer rows the catalog was derived from.
    pub n_customers: usize,
    pub plans: Vec<PlanRecord>,
}
