//! Batch command: parse many invoice files into one report.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use energa_core::export::{sort_records, to_csv, to_payload};
use energa_core::invoice::{EnergaInvoiceParser, InvoiceParser};
use energa_core::pdf::{LineSource, PdfLineSource};

use super::{file_name, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file (CSV default comes from the config, JSON default is stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ReportFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// CSV table, one row per invoice
    Csv,
    /// JSON payload `{"data": [...]}`
    Json,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!("{} Found {} files to process", style("ℹ").blue(), files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let source = PdfLineSource::from_config(config.extraction.clone());
    let mut documents: Vec<(String, Vec<String>)> = Vec::with_capacity(files.len());
    let mut failed: Vec<(String, String)> = Vec::new();

    for path in &files {
        let name = file_name(path)?.to_string();
        let lines = fs::read(path)
            .map_err(anyhow::Error::from)
            .and_then(|data| Ok(source.lines(&data, &name)?));

        match lines {
            Ok(lines) => {
                debug!("Read {} lines from {}", lines.len(), path.display());
                documents.push((name, lines));
            }
            Err(e) if args.continue_on_error => {
                warn!("Failed to read {}: {}", path.display(), e);
                failed.push((name, e.to_string()));
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                anyhow::bail!("Processing failed: {}", e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let parser = EnergaInvoiceParser::from_config(&config.parser);
    let outcome = parser.parse_batch(
        documents
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice())),
    );

    if let Some((name, e)) = outcome.failures.first() {
        if !args.continue_on_error {
            anyhow::bail!("Failed to parse {}: {}", name, e);
        }
    }
    failed.extend(outcome.failures.iter().map(|(n, e)| (n.clone(), e.to_string())));

    let mut records = outcome.records;
    sort_records(&mut records);

    match args.format {
        ReportFormat::Csv => {
            let path = args.output.unwrap_or_else(|| config.export.csv_path.clone());
            fs::write(&path, to_csv(&records)?)?;
            eprintln!("{} Report written to {}", style("✓").green(), path.display());
        }
        ReportFormat::Json => {
            let payload = to_payload(&records)?;
            match args.output {
                Some(path) => {
                    fs::write(&path, payload)?;
                    eprintln!("{} Payload written to {}", style("✓").green(), path.display());
                }
                None => println!("{}", payload),
            }
        }
    }

    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} invoices, {} failed",
        style(records.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for (name, e) in &failed {
            eprintln!("  - {}: {}", name, e);
        }
    }

    Ok(())
}
