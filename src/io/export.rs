//! Export recommendations and the derived catalog to CSV/JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts; the catalog JSON is the portable snapshot document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{CatalogFile, CustomerRecord, PlanRecord, ReportRow};
use crate::error::AppError;

/// Write bulk report rows (full or best-per-customer) to a CSV file.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create report CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "customer_id,name,age,current_plan,monthly_usage_gb,monthly_calls_min,monthly_sms,monthly_bill,\
recommended_plan_id,recommended_plan_price,recommended_plan_data_limit_gb,recommended_plan_call_limit_min,\
recommended_plan_sms_limit,recommendation_score,data_util,call_util,sms_util"
    )
    .map_err(|e| AppError::new(4, format!("Failed to write report CSV header: {e}")))?;

    for row in rows {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.customer_id,
            row.name.as_deref().unwrap_or(""),
            row.age.as_deref().unwrap_or(""),
            row.current_plan,
            row.monthly_usage_gb,
            row.monthly_calls_min,
            row.monthly_sms,
            row.monthly_bill,
            row.recommended_plan_id,
            row.recommended_plan_price,
            row.recommended_plan_data_limit_gb,
            row.recommended_plan_call_limit_min,
            row.recommended_plan_sms_limit,
            row.recommendation_score,
            row.data_util,
            row.call_util,
            row.sms_util,
        )
        .map_err(|e| AppError::new(4, format!("Failed to write report CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the derived catalog to a CSV file.
pub fn write_catalog_csv(path: &Path, catalog: &[PlanRecord]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create catalog CSV '{}': {e}", path.display())))?;

    writeln!(file, "plan_id,data_limit_gb,call_limit_min,sms_limit,plan_price")
        .map_err(|e| AppError::new(4, format!("Failed to write catalog CSV header: {e}")))?;

    for plan in catalog {
        writeln!(
            file,
            "{},{},{},{},{}",
            plan.plan_id, plan.data_limit_gb, plan.call_limit_min, plan.sms_limit, plan.plan_price
        )
        .map_err(|e| AppError::new(4, format!("Failed to write catalog CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the derived catalog as a JSON snapshot document.
pub fn write_catalog_json(path: &Path, catalog: &[PlanRecord], n_customers: usize) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create catalog JSON '{}': {e}", path.display())))?;

    let doc = CatalogFile {
        tool: "planfit".to_string(),
        n_customers,
        plans: catalog.to_vec(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(4, format!("Failed to write catalog JSON: {e}")))?;

    Ok(())
}

/// Write a customer dataset to CSV (used by the sample generator).
///
/// The column set matches the ingest schema exactly, so generated files can
/// be fed straight back into `load_customers`.
pub fn write_customers_csv(path: &Path, customers: &[CustomerRecord]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create customers CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "customer_id,name,age,monthly_usage_gb,monthly_calls_min,monthly_sms,current_plan,\
data_limit_gb,call_limit_min,sms_limit,monthly_bill"
    )
    .map_err(|e| AppError::new(4, format!("Failed to write customers CSV header: {e}")))?;

    for c in customers {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{}",
            c.customer_id,
            c.name.as_deref().unwrap_or(""),
            c.age.as_deref().unwrap_or(""),
            c.monthly_usage_gb,
            c.monthly_calls_min,
            c.monthly_sms,
            c.current_plan,
            c.data_limit_gb,
            c.call_limit_min,
            c.sms_limit,
            c.monthly_bill,
        )
        .map_err(|e| AppError::new(4, format!("Failed to write customers CSV row: {e}")))?;
    }

    Ok(())
}
