//! Command-line entry point: read the Data and BOQ sheets from an input
//! workbook, assemble the billing template, and write the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use billgen_sheet::Sheet;

#[derive(Parser, Debug)]
#[command(name = "billgen", version, about = "Generate an IPC billing workbook from Data and BOQ sheets")]
struct Cli {
    /// Workbook containing the "Data" sheet
    #[arg(long)]
    data: PathBuf,

    /// Workbook containing the "BOQ" sheet
    #[arg(long)]
    boq: PathBuf,

    /// Output workbook path
    #[arg(short, long, default_value = "generated_bill.xlsx")]
    output: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let data = Sheet::from_xlsx_sheet(&cli.data, "Data")
        .with_context(|| format!("reading Data sheet from {}", cli.data.display()))?;
    let boq = Sheet::from_xlsx_sheet(&cli.boq, "BOQ")
        .with_context(|| format!("reading BOQ sheet from {}", cli.boq.display()))?;

    tracing::info!(
        data_rows = data.row_count(),
        boq_rows = boq.row_count(),
        "inputs loaded"
    );

    let book = billgen_template::assemble(&data, &boq).context("assembling workbook")?;
    book.save_as_xlsx(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
