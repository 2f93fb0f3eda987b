//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the scoring/ranking code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{CustomerRecord, PlanRecord, ReportRow, ScoredCandidate};
use crate::io::ingest::IngestedData;
use crate::report::SkippedCustomer;

/// Format the dataset summary (row counts + derived catalog size).
pub fn format_run_summary(ingest: &IngestedData, catalog: &[PlanRecord]) -> String {
    let mut out = String::new();

    out.push_str("=== planfit - Telecom Plan Recommendations ===\n");
    out.push_str(&format!(
        "Rows: read={} used={} skipped={}\n",
        ingest.rows_read,
        ingest.rows_used,
        ingest.row_errors.len()
    ));
    if let Some(stats) = &ingest.stats {
        out.push_str(&format!(
            "Customers: n={} | usage=[{:.2}, {:.2}]GB | bill=[{:.2}, {:.2}]\n",
            stats.n_customers, stats.usage_gb_min, stats.usage_gb_max, stats.bill_min, stats.bill_max
        ));
    }
    out.push_str(&format!("Catalog: {} plan(s) derived\n", catalog.len()));

    out
}

/// Format a one-customer summary plus their current plan's derived limits.
///
/// A `current_plan` value with no catalog row is a defined soft case (it can
/// only happen for caller-supplied catalogs); we print a note, never fail.
pub fn format_customer_summary(customer: &CustomerRecord, current: Option<&PlanRecord>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Customer: {}", customer.customer_id));
    if let Some(name) = customer.name.as_deref() {
        out.push_str(&format!(" ({name})"));
    }
    if let Some(age) = customer.age.as_deref() {
        out.push_str(&format!(", age {age}"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Usage: {:.2}GB, {:.0}min, {:.0} SMS | bill {:.2} | plan {}\n",
        customer.monthly_usage_gb,
        customer.monthly_calls_min,
        customer.monthly_sms,
        customer.monthly_bill,
        customer.current_plan,
    ));

    match current {
        Some(plan) => out.push_str(&format!(
            "Current plan limits (median): {:.2}GB, {:.0}min, {:.0} SMS @ {:.2}\n",
            plan.data_limit_gb, plan.call_limit_min, plan.sms_limit, plan.plan_price
        )),
        None => out.push_str("Current plan not found in the derived catalog.\n"),
    }

    out
}

/// Format the top-K candidate table for one customer.
pub fn format_candidates(candidates: &[ScoredCandidate]) -> String {
    if candidates.is_empty() {
        return "No candidates available (empty catalog).\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>10} {:>10} {:>10} {:>8} {:>7} {:>10} {:>9}\n",
        "plan", "price", "data_gb", "calls_min", "sms", "score", "usage_fit", "cost_fit"
    ));
    out.push_str(&format!(
        "{:-<20} {:-<10} {:-<10} {:-<10} {:-<8} {:-<7} {:-<10} {:-<9}\n",
        "", "", "", "", "", "", "", ""
    ));
    for c in candidates {
        out.push_str(&format!(
            "{:<20} {:>10.2} {:>10.2} {:>10.0} {:>8.0} {:>7.3} {:>10.3} {:>9.3}\n",
            truncate(&c.plan.plan_id, 20),
            c.plan.plan_price,
            c.plan.data_limit_gb,
            c.plan.call_limit_min,
            c.plan.sms_limit,
            c.score,
            c.diagnostics.usage_fit,
            c.diagnostics.cost_fit,
        ));
    }
    out
}

/// Format the derived catalog table.
pub fn format_catalog(catalog: &[PlanRecord]) -> String {
    if catalog.is_empty() {
        return "No plans derivable (empty dataset).\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>10} {:>10} {:>10} {:>10}\n",
        "plan_id", "data_gb", "calls_min", "sms", "price"
    ));
    out.push_str(&format!(
        "{:-<20} {:-<10} {:-<10} {:-<10} {:-<10}\n",
        "", "", "", "", ""
    ));
    for plan in catalog {
        out.push_str(&format!(
            "{:<20} {:>10.2} {:>10.0} {:>10.0} {:>10.2}\n",
            truncate(&plan.plan_id, 20),
            plan.data_limit_gb,
            plan.call_limit_min,
            plan.sms_limit,
            plan.plan_price,
        ));
    }
    out
}

/// Format the best-recommendation-per-customer summary table.
pub fn format_best_summary(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "No recommendations (empty dataset or catalog).\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Best recommendation per customer:\n");
    out.push_str(&format!(
        "{:<12} {:<18} {:<14} {:<14} {:>10} {:>7}\n",
        "customer", "name", "current", "recommended", "price", "score"
    ));
    out.push_str(&format!(
        "{:-<12} {:-<18} {:-<14} {:-<14} {:-<10} {:-<7}\n",
        "", "", "", "", "", ""
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<12} {:<18} {:<14} {:<14} {:>10.2} {:>7.3}\n",
            truncate(&row.customer_id, 12),
            truncate(row.name.as_deref().unwrap_or(""), 18),
            truncate(&row.current_plan, 14),
            truncate(&row.recommended_plan_id, 14),
            row.recommended_plan_price,
            row.recommendation_score,
        ));
    }
    out
}

/// Format skipped-customer notes for stderr.
pub fn format_skipped(skipped: &[SkippedCustomer]) -> String {
    let mut out = String::new();
    for skip in skipped {
        out.push_str(&format!(
            "warning: skipped customer {}: {}\n",
            skip.customer_id, skip.reason
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitDiagnostics;

    #[test]
    fn candidate_table_lists_each_plan_once() {
        let candidates = vec![ScoredCandidate {
            plan: PlanRecord {
                plan_id: "standard".to_string(),
                data_limit_gb: 10.0,
                call_limit_min: 500.0,
                sms_limit: 100.0,
                plan_price: 499.0,
            },
            score: 4.125,
            diagnostics: FitDiagnostics {
                data_util: 1.0,
                call_util: 1.0,
                sms_util: 1.0,
                usage_fit: 1.0,
                cost_fit: 0.5,
            },
        }];
        let table = format_candidates(&candidates);
        assert!(table.contains("standard"));
        assert!(table.contains("4.125"));
    }

    #[test]
    fn empty_candidates_render_a_no_data_notice() {
        assert!(format_candidates(&[]).contains("No candidates"));
        assert!(format_catalog(&[]).contains("No plans"));
        assert!(format_best_summary(&[]).contains("No recommendations"));
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate("basic", 20), "basic");
        assert_eq!(truncate("a-very-long-plan-identifier", 10), "a-very-lo.");
    }
}
