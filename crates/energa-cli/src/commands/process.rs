//! Process command - parse a single invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use energa_core::invoice::{EnergaInvoiceParser, InvoiceParser};
use energa_core::pdf::{LineSource, PdfLineSource};
use energa_core::InvoiceRecord;

use super::{file_name, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the extracted lines instead of parsing them
    #[arg(long)]
    lines: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let name = file_name(&args.input)?;
    let data = fs::read(&args.input)?;
    let lines = PdfLineSource::from_config(config.extraction.clone()).lines(&data, name)?;

    if args.lines {
        for line in &lines {
            println!("{}", line);
        }
        return Ok(());
    }

    let parser = EnergaInvoiceParser::from_config(&config.parser);
    let result = parser.parse(name, &lines)?;

    for (section, count) in &result.line_counts {
        info!("{:?}: {} lines", section, count);
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.record)?,
        OutputFormat::Text => format_record_text(&result.record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {} in {}ms",
            style("✓").green(),
            output_path.display(),
            result.processing_time_ms
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.id));
    output.push_str(&format!("Period:  {} - {}\n", record.period_start, record.period_end));
    output.push('\n');

    output.push_str("Drawn:\n");
    output.push_str(&format!("  {} -> {} ({} kWh)\n", record.drawn_from, record.drawn_to, record.drawn_kwh));
    output.push_str(&format!("  Balance: {} kWh\n", record.drawn_balance));
    output.push_str("Fed in:\n");
    output.push_str(&format!("  {} -> {} ({} kWh)\n", record.fed_from, record.fed_to, record.fed_kwh));
    output.push_str(&format!("  Balance: {} kWh\n", record.fed_balance));
    output.push('\n');

    output.push_str(&format!("Sales:        {} (excise {})\n", record.sales_energy, record.sales_excise));
    output.push_str(&format!("Distribution: {}\n", record.distribution_total()));
    output.push('\n');

    output.push_str("Deposit:\n");
    output.push_str(&format!(
        "  Introduced: {} ({} per kWh)\n",
        record.deposit_introduced, record.deposit_unit_price
    ));
    output.push_str(&format!("  Withdrawn:  {}\n", record.deposit_withdrawn));
    output.push_str(&format!("  Total:      {}\n", record.deposit_total));

    output
}
