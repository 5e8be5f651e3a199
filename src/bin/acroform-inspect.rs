//! AcroForm inspector CLI tool
//!
//! A command-line tool for debugging checkbox and strike-through field
//! placement in generated PDF forms.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use acroform_inspect::report::summarize;
use acroform_inspect::{inspect, FieldPattern, FormDocument, InspectOptions};

/// AcroForm Inspector - Show where checkbox and strike widgets ended up
#[derive(Parser)]
#[command(name = "acroform-inspect")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Inspect the default Check 1..20 / Strike1..20 fields
    acroform-inspect inspect generated.pdf

    # Only list two strike fields, up to 30 widgets each
    acroform-inspect inspect generated.pdf --strike-fields 9,10 --row-limit 30

    # List the top-level field names
    acroform-inspect info generated.pdf

    # Show debug logging
    RUST_LOG=debug acroform-inspect inspect generated.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report checkbox values and strike widget positions
    Inspect {
        /// PDF file to inspect
        input: PathBuf,

        /// Checkbox field name prefix (names are prefix + 1..=count)
        #[arg(long, default_value = "Check ")]
        check_prefix: String,

        /// Number of checkbox fields
        #[arg(long, default_value_t = 20)]
        check_count: u32,

        /// Strike field name prefix (names are prefix + 1..=count)
        #[arg(long, default_value = "Strike")]
        strike_prefix: String,

        /// Number of strike fields
        #[arg(long, default_value_t = 20)]
        strike_count: u32,

        /// Strike field numbers whose widgets are listed
        #[arg(long, value_delimiter = ',', default_value = "9,10,11,12,13,16,17,18,19,20")]
        strike_fields: Vec<u32>,

        /// Maximum widget rows printed per strike field
        #[arg(long, default_value_t = 18)]
        row_limit: usize,
    },

    /// Show page count, AcroForm presence and top-level field names
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect {
            input, check_prefix, check_count, strike_prefix, strike_count,
            strike_fields, row_limit,
        } => {
            let options = InspectOptions {
                input_path: input,
                checkboxes: FieldPattern::new(check_prefix, check_count),
                strikes: FieldPattern::new(strike_prefix, strike_count),
                strike_details: strike_fields,
                row_limit,
            };
            cmd_inspect(&options)
        }
        Commands::Info { input } => {
            cmd_info(input)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Run the checkbox and strike reports
fn cmd_inspect(options: &InspectOptions) -> anyhow::Result<()> {
    let doc = FormDocument::load(&options.input_path)
        .with_context(|| format!("Failed to open {}", options.input_path.display()))?;

    let report = inspect(&doc, options)
        .with_context(|| format!("Failed to inspect {}", options.input_path.display()))?;

    print!("{}", report);

    Ok(())
}

/// Show information about a PDF form
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    let doc = FormDocument::load(&input)
        .with_context(|| format!("Failed to open {}", input.display()))?;

    let summary = summarize(&doc)
        .with_context(|| format!("Failed to read form fields of {}", input.display()))?;

    println!("File: {}", input.display());
    print!("{}", summary);

    Ok(())
}
