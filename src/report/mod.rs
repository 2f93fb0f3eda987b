//! Bulk reporting: top-k recommendations for every customer in a dataset.

use rayon::prelude::*;

use crate::domain::{CustomerRecord, PlanRecord, ReportRow, ScoredCandidate};
use crate::engine::recommend::rank_plans;
use crate::error::AppError;

pub mod format;

/// A customer omitted from the bulk report, with the reason recorded.
#[derive(Debug, Clone)]
pub struct SkippedCustomer {
    pub customer_id: String,
    pub reason: String,
}

/// Bulk output: flattened (customer, rank) rows plus per-customer soft
/// failures. Skips never abort the batch.
#[derive(Debug, Clone)]
pub struct BulkReport {
    pub rows: Vec<ReportRow>,
    pub skipped: Vec<SkippedCustomer>,
}

/// Run the recommender over every customer and flatten the results.
///
/// Customers are scored independently against the full catalog (parallel
/// map); per-customer chunks are merged by concatenation in input order, so
/// output ordering matches the dataset regardless of scheduling.
pub fn build_report(
    customers: &[CustomerRecord],
    catalog: &[PlanRecord],
    k: usize,
) -> Result<BulkReport, AppError> {
    if k == 0 {
        return Err(AppError::new(2, "Top-K must be at least 1."));
    }

    let per_customer: Vec<Result<Vec<ReportRow>, SkippedCustomer>> = customers
        .par_iter()
        .map(|customer| match validate_customer(customer) {
            Ok(()) => {
                let mut ranked = rank_plans(customer, catalog);
                ranked.truncate(k);
                Ok(ranked
                    .into_iter()
                    .map(|candidate| to_report_row(customer, &candidate))
                    .collect())
            }
            Err(reason) => Err(SkippedCustomer {
                customer_id: customer.customer_id.clone(),
                reason,
            }),
        })
        .collect();

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for chunk in per_customer {
        match chunk {
            Ok(mut customer_rows) => rows.append(&mut customer_rows),
            Err(skip) => skipped.push(skip),
        }
    }

    Ok(BulkReport { rows, skipped })
}

/// Reduce a report to one row per customer: the highest-scoring candidate.
///
/// Rows are sorted by `(customer_id asc, score desc)` first, so ties resolve
/// to the first occurrence deterministically.
pub fn best_per_customer(rows: &[ReportRow]) -> Vec<ReportRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        a.customer_id.cmp(&b.customer_id).then_with(|| {
            b.recommendation_score
                .partial_cmp(&a.recommendation_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    let mut best: Vec<ReportRow> = Vec::new();
    for row in sorted {
        match best.last() {
            Some(prev) if prev.customer_id == row.customer_id => {}
            _ => best.push(row),
        }
    }
    best
}

/// Numeric sanity check for one customer row.
///
/// Ingest enforces this already; the reporter re-checks so the engine stays
/// safe when called as a library on caller-constructed records.
fn validate_customer(customer: &CustomerRecord) -> Result<(), String> {
    let fields = [
        ("monthly_usage_gb", customer.monthly_usage_gb),
        ("monthly_calls_min", customer.monthly_calls_min),
        ("monthly_sms", customer.monthly_sms),
        ("data_limit_gb", customer.data_limit_gb),
        ("call_limit_min", customer.call_limit_min),
        ("sms_limit", customer.sms_limit),
        ("monthly_bill", customer.monthly_bill),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("Invalid `{name}` (must be finite and >= 0)."));
        }
    }
    Ok(())
}

fn to_report_row(customer: &CustomerRecord, candidate: &ScoredCandidate) -> ReportRow {
    ReportRow {
        customer_id: customer.customer_id.clone(),
        name: customer.name.clone(),
        age: customer.age.clone(),
        current_plan: customer.current_plan.clone(),
        monthly_usage_gb: customer.monthly_usage_gb,
        monthly_calls_min: customer.monthly_calls_min,
        monthly_sms: customer.monthly_sms,
        monthly_bill: customer.monthly_bill,
        recommended_plan_id: candidate.plan.plan_id.clone(),
        recommended_plan_price: candidate.plan.plan_price,
        recommended_plan_data_limit_gb: candidate.plan.data_limit_gb,
        recommended_plan_call_limit_min: candidate.plan.call_limit_min,
        recommended_plan_sms_limit: candidate.plan.sms_limit,
        recommendation_score: candidate.score,
        data_util: candidate.diagnostics.data_util,
        call_util: candidate.diagnostics.call_util,
        sms_util: candidate.diagnostics.sms_util,
    }
}
