//! Fit scoring for a single (customer, plan) pair.
//!
//! The score combines two ingredients:
//!
//! - **usage fit**: how close the customer's data/call/SMS usage sits to the
//!   plan's entitlements (utilization of exactly 1.0 is ideal; under- and
//!   over-use degrade fit symmetrically)
//! - **cost fit**: 1.0 when the plan costs no more than the customer's current
//!   bill, decaying as the plan gets more expensive
//!
//! The blend is `0.65 * usage_fit + 0.35 * cost_fit`, scaled to a 0–5 rating.
//! Score and diagnostics are rounded to 3 decimals as a deliberate contract
//! (`round3`), so presentation layers see stable values.

use crate::domain::{CustomerRecord, FitDiagnostics, PlanRecord, ScoredCandidate};

/// Division-by-zero guard for zero-entitlement plans and zero bills.
const EPS: f64 = 1e-9;

/// Policy weights favoring usage match over price. Tunable, must sum to 1.
const USAGE_WEIGHT: f64 = 0.65;
const COST_WEIGHT: f64 = 0.35;

/// Scores are presented on a 0–5 rating scale.
const SCORE_SCALE: f64 = 5.0;

/// Score how well `plan` fits `customer`.
///
/// Pure function: malformed numeric input (NaN, negatives) is the caller's
/// responsibility to reject; see `io::ingest` and `report::build_report`.
pub fn score_plan(customer: &CustomerRecord, plan: &PlanRecord) -> ScoredCandidate {
    let data_util = customer.monthly_usage_gb / (plan.data_limit_gb + EPS);
    let call_util = customer.monthly_calls_min / (plan.call_limit_min + EPS);
    let sms_util = customer.monthly_sms / (plan.sms_limit + EPS);

    let usage_fit =
        (fit_from_util(data_util) + fit_from_util(call_util) + fit_from_util(sms_util)) / 3.0;

    // Plans at or below current spend get full cost credit; pricier plans
    // decay proportionally, never below 0 nor above 1.
    let cost_ratio = plan.plan_price / (customer.monthly_bill + EPS);
    let cost_fit = if cost_ratio <= 1.0 {
        1.0
    } else {
        (1.0 / cost_ratio).clamp(0.0, 1.0)
    };

    let score = (USAGE_WEIGHT * usage_fit + COST_WEIGHT * cost_fit) * SCORE_SCALE;

    ScoredCandidate {
        plan: plan.clone(),
        score: round3(score),
        diagnostics: FitDiagnostics {
            data_util: round3(data_util),
            call_util: round3(call_util),
            sms_util: round3(sms_util),
            usage_fit: round3(usage_fit),
            cost_fit: round3(cost_fit),
        },
    }
}

/// Map a utilization ratio to a fit value in `[0, 1]`.
///
/// `1 - |u - 1|` peaks at 1.0 for perfect utilization; the clamp to `[-1, 1]`
/// bounds the penalty for extreme over/under-use before rescaling to `[0, 1]`.
fn fit_from_util(util: f64) -> f64 {
    let fit = (1.0 - (util - 1.0).abs()).clamp(-1.0, 1.0);
    (fit + 1.0) / 2.0
}

/// Round to 3 decimal places.
///
/// Applied once, after the scoring math, so alternate precision policies can
/// be substituted without touching the formulas.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
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

    fn plan(data: f64, calls: f64, sms: f64, price: f64) -> PlanRecord {
        PlanRecord {
            plan_id: "p".to_string(),
            data_limit_gb: data,
            call_limit_min: calls,
            sms_limit: sms,
            plan_price: price,
        }
    }

    #[test]
    fn perfect_utilization_at_cost_parity_scores_five() {
        let c = customer(10.0, 500.0, 100.0, 500.0);
        let p = plan(10.0, 500.0, 100.0, 500.0);
        let scored = score_plan(&c, &p);
        assert!((scored.score - 5.0).abs() < 1e-9);
        assert!((scored.diagnostics.usage_fit - 1.0).abs() < 1e-9);
        assert!((scored.diagnostics.cost_fit - 1.0).abs() < 1e-9);
    }

    #[test]
    fn double_priced_plan_scores_4_125() {
        let c = customer(10.0, 500.0, 100.0, 500.0);
        let p = plan(10.0, 500.0, 100.0, 1000.0);
        let scored = score_plan(&c, &p);
        assert!((scored.diagnostics.usage_fit - 1.0).abs() < 1e-9);
        assert!((scored.diagnostics.cost_fit - 0.5).abs() < 1e-9);
        assert!((scored.score - 4.125).abs() < 1e-9);
    }

    #[test]
    fn cheaper_plan_gets_full_cost_credit() {
        let c = customer(5.0, 100.0, 10.0, 400.0);
        let p = plan(5.0, 100.0, 10.0, 150.0);
        let scored = score_plan(&c, &p);
        assert!((scored.diagnostics.cost_fit - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_and_diagnostics_stay_in_bounds() {
        // Deliberately extreme inputs: massive over-use and a zero-limit plan.
        let c = customer(1000.0, 0.0, 99999.0, 10.0);
        let p = plan(1.0, 0.0, 100.0, 5000.0);
        let scored = score_plan(&c, &p);
        assert!(scored.score >= 0.0 && scored.score <= 5.0);
        assert!(scored.diagnostics.usage_fit >= 0.0 && scored.diagnostics.usage_fit <= 1.0);
        assert!(scored.diagnostics.cost_fit >= 0.0 && scored.diagnostics.cost_fit <= 1.0);
    }

    #[test]
    fn zero_limit_plan_does_not_divide_by_zero() {
        let c = customer(0.0, 0.0, 0.0, 0.0);
        let p = plan(0.0, 0.0, 0.0, 0.0);
        let scored = score_plan(&c, &p);
        assert!(scored.score.is_finite());
        // Zero usage on zero limits is utilization 0, not NaN.
        assert!((scored.diagnostics.data_util - 0.0).abs() < 1e-9);
    }

    #[test]
    fn under_and_over_use_degrade_symmetrically() {
        let c_under = customer(5.0, 500.0, 100.0, 500.0);
        let c_over = customer(15.0, 500.0, 100.0, 500.0);
        let p = plan(10.0, 500.0, 100.0, 500.0);
        let under = score_plan(&c_under, &p);
        let over = score_plan(&c_over, &p);
        assert!((under.score - over.score).abs() < 1e-9);
        assert!(under.score < 5.0);
    }

    #[test]
    fn round3_contract() {
        assert!((round3(4.1254) - 4.125).abs() < 1e-12);
        assert!((round3(1.23456) - 1.235).abs() < 1e-12);
        assert!((round3(1.23444) - 1.234).abs() < 1e-12);
        assert!((round3(2.0) - 2.0).abs() < 1e-12);
    }
}
