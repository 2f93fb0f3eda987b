//! Per-customer ranking of catalog plans.

use crate::domain::{CustomerRecord, PlanRecord, ScoredCandidate};
use crate::engine::score::score_plan;
use crate::error::AppError;

/// Score every catalog plan for `customer`, best first.
///
/// The sort is stable, so plans with equal scores keep their catalog order
/// (first-seen plan wins). An empty catalog yields an empty ranking.
pub fn rank_plans(customer: &CustomerRecord, catalog: &[PlanRecord]) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> =
        catalog.iter().map(|plan| score_plan(customer, plan)).collect();
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Top-k recommendations for one customer.
///
/// `k` is validated before any scoring work; a `k` larger than the catalog
/// returns all available candidates without error.
pub fn recommend_plans(
    customer: &CustomerRecord,
    catalog: &[PlanRecord],
    k: usize,
) -> Result<Vec<ScoredCandidate>, AppError> {
    if k == 0 {
        return Err(AppError::new(2, "Top-K must be at least 1."));
    }
    let mut ranked = rank_plans(customer, catalog);
    ranked.truncate(k);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(usage_gb: f64, calls_min: f64, sms: f64, bill: f64) -> CustomerRecord {
        CustomerRecord {
            customer_id: "C1".to_string(),
            name: None,
            age: None,
            current_plan: "basic".to_string(),
            monthly_usage_gb: usage_gb,
            monthly_calls_min: calls_min,
            monthly_sms: sms,
            data_limit_gb: usage_gb,
            call_limit_min: calls_min,
            sms_limit: sms,
            monthly_bill: bill,
        }
    }

    fn plan(id: &str, data: f64, calls: f64, sms: f64, price: f64) -> PlanRecord {
        PlanRecord {
            plan_id: id.to_string(),
            data_limit_gb: data,
            call_limit_min: calls,
            sms_limit: sms,
            plan_price: price,
        }
    }

    fn small_catalog() -> Vec<PlanRecord> {
        vec![
            plan("basic", 2.0, 100.0, 50.0, 199.0),
            plan("standard", 10.0, 500.0, 100.0, 499.0),
            plan("max", 100.0, 3000.0, 1000.0, 1299.0),
        ]
    }

    #[test]
    fn results_are_sorted_non_increasing() {
        let c = customer(10.0, 500.0, 100.0, 499.0);
        let recs = recommend_plans(&c, &small_catalog(), 3).unwrap();
        assert_eq!(recs.len(), 3);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(recs[0].plan.plan_id, "standard");
    }

    #[test]
    fn k_larger_than_catalog_returns_all() {
        let c = customer(1.0, 1.0, 1.0, 1.0);
        let recs = recommend_plans(&c, &small_catalog(), 10).unwrap();
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn empty_catalog_returns_empty() {
        let c = customer(1.0, 1.0, 1.0, 1.0);
        let recs = recommend_plans(&c, &[], 5).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn zero_k_is_rejected_before_scoring() {
        let c = customer(1.0, 1.0, 1.0, 1.0);
        let err = recommend_plans(&c, &small_catalog(), 0).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        // Two identical plans under different ids score identically; the
        // stable sort must keep the first-seen one on top.
        let catalog = vec![
            plan("alpha", 10.0, 500.0, 100.0, 500.0),
            plan("beta", 10.0, 500.0, 100.0, 500.0),
        ];
        let c = customer(10.0, 500.0, 100.0, 500.0);
        let recs = recommend_plans(&c, &catalog, 2).unwrap();
        assert_eq!(recs[0].plan.plan_id, "alpha");
        assert_eq!(recs[1].plan.plan_id, "beta");
        assert!((recs[0].score - recs[1].score).abs() < 1e-12);
    }
}
