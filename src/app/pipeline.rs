//! Shared dataset pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest -> validation -> catalog derivation
//!
//! Subcommands then focus on presentation (printing vs exporting).

use std::path::Path;

use crate::domain::PlanRecord;
use crate::engine::catalog::build_catalog;
use crate::error::AppError;
use crate::io::ingest::{self, IngestedData};

/// Ingested dataset plus the catalog derived from it.
#[derive(Debug, Clone)]
pub struct DatasetRun {
    pub ingest: IngestedData,
    pub catalog: Vec<PlanRecord>,
}

/// Load a customer CSV and derive the plan catalog.
///
/// An empty (but schema-valid) dataset is not an error here; it produces an
/// empty catalog, and callers render the "no data" state.
pub fn load_dataset(path: &Path) -> Result<DatasetRun, AppError> {
    let ingest = ingest::load_customers(path)?;
    let catalog = build_catalog(&ingest.customers);
    Ok(DatasetRun { ingest, catalog })
}
