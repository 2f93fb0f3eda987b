//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input rows (`CustomerRecord`) and derived catalog entries (`PlanRecord`)
//! - scoring outputs (`ScoredCandidate`, `FitDiagnostics`)
//! - bulk report rows (`ReportRow`)
//! - the portable catalog snapshot (`CatalogFile`)

pub mod types;

pub use types::*;
