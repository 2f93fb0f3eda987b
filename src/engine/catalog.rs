//! Plan catalog derivation.
//!
//! The catalog is derived from the subscribers themselves: rows are grouped by
//! `current_plan` and each plan attribute is the **median** over the group
//! (median rather than mean to resist outlier rows). The group's median
//! `monthly_bill` becomes the plan's `plan_price`.

use std::collections::HashMap;

use crate::domain::{CustomerRecord, PlanRecord};

/// Collapse customer rows into one catalog entry per distinct plan.
///
/// Output is sorted ascending by `plan_id` so repeated runs over the same
/// dataset produce identical catalogs. An empty input yields an empty catalog.
pub fn build_catalog(customers: &[CustomerRecord]) -> Vec<PlanRecord> {
    let mut groups: HashMap<&str, Vec<&CustomerRecord>> = HashMap::new();
    for customer in customers {
        groups
            .entry(customer.current_plan.as_str())
            .or_default()
            .push(customer);
    }

    let mut catalog: Vec<PlanRecord> = groups
        .into_iter()
        .map(|(plan_id, rows)| PlanRecord {
            plan_id: plan_id.to_string(),
            data_limit_gb: median(rows.iter().map(|r| r.data_limit_gb).collect()),
            call_limit_min: median(rows.iter().map(|r| r.call_limit_min).collect()),
            sms_limit: median(rows.iter().map(|r| r.sms_limit).collect()),
            plan_price: median(rows.iter().map(|r| r.monthly_bill).collect()),
        })
        .collect();

    catalog.sort_by(|a, b| a.plan_id.cmp(&b.plan_id));
    catalog
}

/// Median of a group of values; even-sized groups take the mean of the two
/// middle values. Groups are non-empty by construction (one value per row).
fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(id: &str, plan: &str, limits: [f64; 3], bill: f64) -> CustomerRecord {
        CustomerRecord {
            customer_id: id.to_string(),
            name: None,
            age: None,
            current_plan: plan.to_string(),
            monthly_usage_gb: 1.0,
            monthly_calls_min: 1.0,
            monthly_sms: 1.0,
            data_limit_gb: limits[0],
            call_limit_min: limits[1],
            sms_limit: limits[2],
            monthly_bill: bill,
        }
    }

    #[test]
    fn median_odd_and_even() {
        assert!((median(vec![3.0, 1.0, 2.0]) - 2.0).abs() < 1e-12);
        assert!((median(vec![4.0, 1.0, 2.0, 3.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn groups_by_plan_and_takes_medians() {
        let customers = vec![
            subscriber("C1", "basic", [2.0, 100.0, 50.0], 199.0),
            subscriber("C2", "basic", [3.0, 120.0, 60.0], 201.0),
            subscriber("C3", "basic", [2.5, 110.0, 55.0], 200.0),
            subscriber("C4", "max", [50.0, 1000.0, 500.0], 999.0),
        ];
        let catalog = build_catalog(&customers);
        assert_eq!(catalog.len(), 2);

        assert_eq!(catalog[0].plan_id, "basic");
        assert!((catalog[0].data_limit_gb - 2.5).abs() < 1e-12);
        assert!((catalog[0].call_limit_min - 110.0).abs() < 1e-12);
        assert!((catalog[0].sms_limit - 55.0).abs() < 1e-12);
        assert!((catalog[0].plan_price - 200.0).abs() < 1e-12);

        assert_eq!(catalog[1].plan_id, "max");
        assert!((catalog[1].plan_price - 999.0).abs() < 1e-12);
    }

    #[test]
    fn even_group_takes_mean_of_middle_values() {
        let customers = vec![
            subscriber("C1", "p", [1.0, 0.0, 0.0], 100.0),
            subscriber("C2", "p", [2.0, 0.0, 0.0], 300.0),
        ];
        let catalog = build_catalog(&customers);
        assert!((catalog[0].data_limit_gb - 1.5).abs() < 1e-12);
        assert!((catalog[0].plan_price - 200.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        assert!(build_catalog(&[]).is_empty());
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let customers = vec![
            subscriber("C1", "b", [1.0, 2.0, 3.0], 4.0),
            subscriber("C2", "a", [5.0, 6.0, 7.0], 8.0),
            subscriber("C3", "b", [9.0, 10.0, 11.0], 12.0),
        ];
        let first = build_catalog(&customers);
        let second = build_catalog(&customers);
        assert_eq!(first, second);
        assert_eq!(first[0].plan_id, "a");
        assert_eq!(first[1].plan_id, "b");
    }
}
