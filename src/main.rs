//! cut-estimate - CLI tool to price cutting jobs and print a shareable summary.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cut_estimate::{
    format_currency, load_estimate_file, load_price_list_file, validate_estimate, Clipboard,
    EstimateError, PriceList, Session,
};

/// Price cutting jobs and materials, then print a shareable estimate.
#[derive(Parser, Debug)]
#[command(name = "cut-estimate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input estimate JSON file
    #[arg(short, long, required_unless_present = "list_prices")]
    input: Option<PathBuf>,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON price list replacing the built-in presets
    #[arg(short, long)]
    price_list: Option<PathBuf>,

    /// Date printed in the summary (YYYY-MM-DD, default today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Fill zero-priced rows from the price list by label
    #[arg(long)]
    fill_prices: bool,

    /// Copy the summary to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the estimate and its totals as JSON
    #[arg(long)]
    debug: bool,

    /// Print the price list and exit
    #[arg(long)]
    list_prices: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// System clipboard.
struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> cut_estimate::Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| EstimateError::Clipboard {
            message: e.to_string(),
        })?;
        clipboard
            .set_text(text)
            .map_err(|e| EstimateError::Clipboard {
                message: e.to_string(),
            })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries the summary
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let price_list = match &args.price_list {
        Some(path) => load_price_list_file(path)
            .with_context(|| format!("Failed to load price list {}", path.display()))?,
        None => PriceList::builtin(),
    };

    if args.list_prices {
        for preset in price_list.presets() {
            println!("{}\t{}", preset.label, format_currency(preset.price));
        }
        return Ok(());
    }

    let input = args.input.context("No input file given")?;
    info!("Processing: {}", input.display());

    // Load the estimate
    let estimate = load_estimate_file(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    info!(
        "Loaded {} cutting row(s), {} material row(s)",
        estimate.cutting_items.len(),
        estimate.material_items.len()
    );

    // Validate
    let validation = validate_estimate(&estimate);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    let mut session = Session::from_estimate(estimate, price_list);

    if args.fill_prices {
        let filled = session.fill_preset_prices();
        info!("Filled {} price(s) from the price list", filled);
    }

    // Debug output
    if args.debug {
        let json = serde_json::json!({
            "estimate": session.estimate(),
            "totals": session.totals(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate output
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let summary = session.summary(date);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &summary)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", summary),
    }

    // Clipboard failures are reported but don't fail the run
    if args.copy {
        match session.copy_summary(&mut SystemClipboard, date, Instant::now()) {
            Ok(()) => info!("Copied estimate to clipboard"),
            Err(err) => error!("{}", err),
        }
    }

    info!(
        "Grand total: {}",
        format_currency(session.totals().grand_total)
    );

    Ok(())
}
