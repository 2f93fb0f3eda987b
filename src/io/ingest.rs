//! CSV ingest and validation.
//!
//! This module is responsible for turning a customer-usage CSV into a clean
//! set of `CustomerRecord`s that are safe to score.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (first occurrence wins on duplicate ids)
//! - **Separation of concerns**: no scoring logic here

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::CustomerRecord;
use crate::error::AppError;

/// Columns every dataset must provide. `name` and `age` are optional.
const REQUIRED_COLUMNS: [&str; 9] = [
    "customer_id",
    "monthly_usage_gb",
    "monthly_calls_min",
    "monthly_sms",
    "current_plan",
    "data_limit_gb",
    "call_limit_min",
    "sms_limit",
    "monthly_bill",
];

/// Summary stats about the customers actually used for scoring.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_customers: usize,
    pub usage_gb_min: f64,
    pub usage_gb_max: f64,
    pub bill_min: f64,
    pub bill_max: f64,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub customer_id: Option<String>,
    pub message: String,
}

/// Ingest output: validated customers + stats + row errors.
///
/// `stats` is `None` for a dataset that validated to zero rows; callers must
/// treat that as a soft "no data" state, not a failure.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub customers: Vec<CustomerRecord>,
    pub stats: Option<DatasetStats>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load and validate a customer CSV file.
pub fn load_customers(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_customers(file)
}

/// Read and validate customer rows from any reader.
///
/// Kept separate from `load_customers` so tests and embedders can ingest from
/// in-memory buffers.
pub fn read_customers<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut customers = Vec::new();
    let mut row_errors = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    customer_id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(customer) => {
                if !seen_ids.insert(customer.customer_id.clone()) {
                    row_errors.push(RowError {
                        line,
                        customer_id: Some(customer.customer_id),
                        message: "Duplicate `customer_id` (first occurrence kept).".to_string(),
                    });
                    continue;
                }
                customers.push(customer);
            }
            Err(message) => row_errors.push(RowError {
                line,
                customer_id: get_optional(&record, &header_map, "customer_id").map(str::to_string),
                message,
            }),
        }
    }

    let stats = compute_stats(&customers);
    let rows_used = customers.len();

    Ok(IngestedData {
        customers,
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿customer_id"). If we don't strip it, schema
    // validation will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !header_map.contains_key(*name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::new(
            2,
            format!("Dataset missing required column(s): {}", missing.join(", ")),
        ))
    }
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<CustomerRecord, String> {
    let customer_id = get_required(record, header_map, "customer_id")?.to_string();
    let current_plan = get_required(record, header_map, "current_plan")?.to_string();

    let name = get_optional(record, header_map, "name").map(str::to_string);
    let age = get_optional(record, header_map, "age").map(str::to_string);

    Ok(CustomerRecord {
        customer_id,
        name,
        age,
        current_plan,
        monthly_usage_gb: parse_numeric(record, header_map, "monthly_usage_gb")?,
        monthly_calls_min: parse_numeric(record, header_map, "monthly_calls_min")?,
        monthly_sms: parse_numeric(record, header_map, "monthly_sms")?,
        data_limit_gb: parse_numeric(record, header_map, "data_limit_gb")?,
        call_limit_min: parse_numeric(record, header_map, "call_limit_min")?,
        sms_limit: parse_numeric(record, header_map, "sms_limit")?,
        monthly_bill: parse_numeric(record, header_map, "monthly_bill")?,
    })
}

/// Parse a required numeric field; finite and non-negative or the row is bad.
fn parse_numeric(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<f64, String> {
    let raw = get_required(record, header_map, name)?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{raw}'."))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Invalid `{name}` (must be finite and >= 0)."));
    }
    Ok(value)
}

fn compute_stats(customers: &[CustomerRecord]) -> Option<DatasetStats> {
    if customers.is_empty() {
        return None;
    }

    let mut usage_min = f64::INFINITY;
    let mut usage_max = f64::NEG_INFINITY;
    let mut bill_min = f64::INFINITY;
    let mut bill_max = f64::NEG_INFINITY;

    for c in customers {
        usage_min = usage_min.min(c.monthly_usage_gb);
        usage_max = usage_max.max(c.monthly_usage_gb);
        bill_min = bill_min.min(c.monthly_bill);
        bill_max = bill_max.max(c.monthly_bill);
    }

    Some(DatasetStats {
        n_customers: customers.len(),
        usage_gb_min: usage_min,
        usage_gb_max: usage_max,
        bill_min,
        bill_max,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}
