// SPDX-License-Identifier: PMPL-1.0-or-later

//! soilseries-convert: turn a soil-series reference CSV export into
//! per-locale localization fragments.
//!
//! The input is produced by dumping the soil-series description table from
//! the backend database with `\copy ... TO 'soilseries_raw.csv' WITH CSV`.
//! Each row holds an identifier and (name, description, management) text for
//! four languages; English and Spanish get an output file each.

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use soilseries_convert::convert::Converter;
use soilseries_convert::render::OutputFormat;

#[derive(Parser)]
#[command(name = "soilseries-convert")]
#[command(version)]
#[command(about = "Convert a soil-series CSV export into per-locale localization fragments")]
struct Cli {
    /// CSV export of the soil-series description table (no header row)
    #[arg(value_name = "INPUT", default_value = "soilseries_raw.csv")]
    input: PathBuf,

    /// Directory for the per-locale output files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "fragment")]
    format: OutputFormat,

    /// Print each converted row
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Converting {}", cli.input.display());

    let summary = Converter::new(cli.input, cli.out_dir, cli.format)
        .verbose(cli.verbose)
        .run()?;

    println!(
        "\n{} {} rows",
        "Converted".bold().green(),
        summary.rows
    );
    for path in &summary.outputs {
        println!("  {}", path.display());
    }

    if cli.format == OutputFormat::Fragment {
        println!(
            "\n{}",
            "Fragments are comma-terminated; splice them into the app's localization files by hand."
                .yellow()
        );
    }

    Ok(())
}
