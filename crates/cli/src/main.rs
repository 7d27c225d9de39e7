use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use stockroom_cli::{load_stock_file, parse_item_specs, run_nights, sample_stock};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stockroom: nightly inventory update",
    long_about = None
)]
struct Cli {
    /// Number of nights to simulate.
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Calendar date of day 0.
    #[arg(long, default_value = "2026-01-01")]
    start_date: NaiveDate,

    /// Load the stock list from a JSON file instead of the built-in sample.
    #[arg(long, value_name = "FILE")]
    stock: Option<PathBuf>,

    /// Append an item given as `name, sell_in, quality` (repeatable).
    #[arg(long = "item", value_name = "SPEC")]
    items: Vec<String>,

    /// Emit the day-by-day snapshots as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();
    let cli = Cli::parse();

    let mut stock = match &cli.stock {
        Some(path) => load_stock_file(path)?,
        None if cli.items.is_empty() => sample_stock(),
        None => Vec::new(),
    };
    stock.extend(parse_item_specs(&cli.items)?);

    tracing::info!(items = stock.len(), nights = cli.days, "starting nightly updates");

    let reports = run_nights(&mut stock, cli.days, cli.start_date);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{report}");
            println!();
        }
    }

    Ok(())
}
