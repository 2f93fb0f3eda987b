//! Command-line parsing for the plan recommendation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/ranking code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "planfit", version, about = "Telecom plan recommendation engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend the top-K plans for a single customer.
    Recommend(RecommendArgs),
    /// Generate recommendations for every customer and print the best-per-customer summary.
    Report(ReportArgs),
    /// Derive and print the plan catalog (medians per plan).
    Catalog(CatalogArgs),
    /// Generate a synthetic customers CSV for demos and testing.
    Sample(SampleArgs),
}

/// Options for single-customer recommendation.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Customer dataset CSV.
    pub csv: PathBuf,

    /// Customer id to inspect.
    #[arg(short = 'c', long)]
    pub customer: String,

    /// How many recommendations to show.
    #[arg(short = 'k', long = "top", default_value_t = 3)]
    pub top: usize,
}

/// Options for the bulk report.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Customer dataset CSV.
    pub csv: PathBuf,

    /// How many recommendations to keep per customer.
    #[arg(short = 'k', long = "top", default_value_t = 3)]
    pub top: usize,

    /// Export the full (customer, rank) report to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the best-per-customer reduction to CSV.
    #[arg(long = "export-best")]
    pub export_best: Option<PathBuf>,
}

/// Options for catalog derivation.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    /// Customer dataset CSV.
    pub csv: PathBuf,

    /// Export the catalog to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the catalog as a JSON snapshot document.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for synthetic dataset generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Number of customers to generate.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub count: usize,

    /// Random seed (same seed, same dataset).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output CSV path.
    #[arg(short = 'o', long)]
    pub out: PathBuf,
}
