//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads/validates the dataset and derives the catalog
//! - runs recommendation/reporting
//! - prints tables and writes optional exports

use clap::Parser;

use crate::cli::{CatalogArgs, Cli, Command, RecommendArgs, ReportArgs, SampleArgs};
use crate::data::sample::{SampleConfig, generate_customers};
use crate::engine::recommend::recommend_plans;
use crate::error::AppError;
use crate::io::export;
use crate::io::ingest::IngestedData;
use crate::report::{best_per_customer, build_report, format};

pub mod pipeline;

/// Entry point for the `planfit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Recommend(args) => handle_recommend(args),
        Command::Report(args) => handle_report(args),
        Command::Catalog(args) => handle_catalog(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let run = pipeline::load_dataset(&args.csv)?;
    warn_row_errors(&run.ingest);

    let Some(customer) = run
        .ingest
        .customers
        .iter()
        .find(|c| c.customer_id == args.customer)
    else {
        return Err(AppError::new(
            3,
            format!("Customer '{}' not found in dataset.", args.customer),
        ));
    };

    let current_plan = run
        .catalog
        .iter()
        .find(|p| p.plan_id == customer.current_plan);
    println!("{}", format::format_customer_summary(customer, current_plan));

    let recommendations = recommend_plans(customer, &run.catalog, args.top)?;
    println!("{}", format::format_candidates(&recommendations));

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let run = pipeline::load_dataset(&args.csv)?;
    warn_row_errors(&run.ingest);

    println!("{}", format::format_run_summary(&run.ingest, &run.catalog));

    let report = build_report(&run.ingest.customers, &run.catalog, args.top)?;
    eprint!("{}", format::format_skipped(&report.skipped));

    let best = best_per_customer(&report.rows);
    println!("{}", format::format_best_summary(&best));

    if let Some(path) = &args.export {
        export::write_report_csv(path, &report.rows)?;
        println!("Wrote full report: {}", path.display());
    }
    if let Some(path) = &args.export_best {
        export::write_report_csv(path, &best)?;
        println!("Wrote best-per-customer report: {}", path.display());
    }

    Ok(())
}

fn handle_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let run = pipeline::load_dataset(&args.csv)?;
    warn_row_errors(&run.ingest);

    println!("{}", format::format_run_summary(&run.ingest, &run.catalog));
    println!("{}", format::format_catalog(&run.catalog));

    if let Some(path) = &args.export {
        export::write_catalog_csv(path, &run.catalog)?;
        println!("Wrote catalog CSV: {}", path.display());
    }
    if let Some(path) = &args.export_json {
        export::write_catalog_json(path, &run.catalog, run.ingest.rows_used)?;
        println!("Wrote catalog JSON: {}", path.display());
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        count: args.count,
        seed: args.seed,
    };
    let customers = generate_customers(&config)?;
    export::write_customers_csv(&args.out, &customers)?;
    println!(
        "Wrote {} customers to '{}' (seed {}).",
        customers.len(),
        args.out.display(),
        args.seed
    );
    Ok(())
}

/// Surface row-level ingest failures on stderr; they are never dropped.
fn warn_row_errors(ingest: &IngestedData) {
    for err in &ingest.row_errors {
        match &err.customer_id {
            Some(id) => eprintln!("warning: line {} ({}): {}", err.line, id, err.message),
            None => eprintln!("warning: line {}: {}", err.line, err.message),
        }
    }
}
