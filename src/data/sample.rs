//! Synthetic customer dataset generation.
//!
//! Customers are drawn from a fixed set of plan archetypes with lognormal
//! usage noise around each plan's entitlements, so derived catalogs recover
//! the archetype attributes and fit scores spread realistically. Generation
//! is fully seeded: the same seed always yields the same dataset.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::CustomerRecord;
use crate::error::AppError;

/// Lognormal sigma for per-resource usage around the plan entitlement.
/// 0.35 keeps most utilizations in roughly [0.5, 2.0].
const USAGE_SIGMA: f64 = 0.35;

/// Lognormal sigma for the billed amount around the plan price (overage
/// charges, discounts).
const BILL_SIGMA: f64 = 0.08;

/// Relative jitter on per-row recorded limits; the per-plan median still
/// recovers the archetype value.
const LIMIT_JITTER: f64 = 0.02;

/// Settings for synthetic dataset generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
}

struct PlanArchetype {
    id: &'static str,
    data_gb: f64,
    calls_min: f64,
    sms: f64,
    price: f64,
}

const ARCHETYPES: [PlanArchetype; 5] = [
    PlanArchetype { id: "saver_1gb", data_gb: 1.0, calls_min: 50.0, sms: 25.0, price: 99.0 },
    PlanArchetype { id: "basic_2gb", data_gb: 2.0, calls_min: 100.0, sms: 50.0, price: 199.0 },
    PlanArchetype { id: "standard_10gb", data_gb: 10.0, calls_min: 500.0, sms: 100.0, price: 499.0 },
    PlanArchetype { id: "plus_25gb", data_gb: 25.0, calls_min: 1200.0, sms: 300.0, price: 799.0 },
    PlanArchetype { id: "max_100gb", data_gb: 100.0, calls_min: 3000.0, sms: 1000.0, price: 1299.0 },
];

const FIRST_NAMES: [&str; 10] = [
    "Asha", "Ravi", "Meera", "Karan", "Priya", "Vikram", "Neha", "Arjun", "Divya", "Sanjay",
];

/// Generate `config.count` synthetic customers.
pub fn generate_customers(config: &SampleConfig) -> Result<Vec<CustomerRecord>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut customers = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let plan = &ARCHETYPES[rng.gen_range(0..ARCHETYPES.len())];

        let usage_gb = lognormal(plan.data_gb, USAGE_SIGMA, &mut rng, &normal);
        let calls_min = lognormal(plan.calls_min, USAGE_SIGMA, &mut rng, &normal);
        let sms = lognormal(plan.sms, USAGE_SIGMA, &mut rng, &normal);
        let bill = lognormal(plan.price, BILL_SIGMA, &mut rng, &normal);

        let name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let age = rng.gen_range(18..=80u32);

        customers.push(CustomerRecord {
            customer_id: format!("C{:04}", i + 1),
            name: Some(name.to_string()),
            age: Some(age.to_string()),
            current_plan: plan.id.to_string(),
            monthly_usage_gb: round2(usage_gb),
            monthly_calls_min: round2(calls_min),
            monthly_sms: round2(sms),
            data_limit_gb: round2(jitter(plan.data_gb, &mut rng, &normal)),
            call_limit_min: round2(jitter(plan.calls_min, &mut rng, &normal)),
            sms_limit: round2(jitter(plan.sms, &mut rng, &normal)),
            monthly_bill: round2(bill),
        });
    }

    Ok(customers)
}

fn lognormal(base: f64, sigma: f64, rng: &mut StdRng, normal: &Normal<f64>) -> f64 {
    let z = normal.sample(rng);
    (base.max(0.0) * (sigma * z).exp()).max(0.0)
}

fn jitter(base: f64, rng: &mut StdRng, normal: &Normal<f64>) -> f64 {
    let z = normal.sample(rng);
    (base * (1.0 + LIMIT_JITTER * z)).max(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
