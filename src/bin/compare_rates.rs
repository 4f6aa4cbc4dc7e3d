//! Rank rate quotes from the command line
//!
//! Usage: cargo run --bin compare_rates -- "Banco A=24% NA/MV" "Banco B=1.8% MV" --mode credito

use anyhow::Context;
use clap::Parser;
use rate_system::{CompareMode, RateComparator, RateOption};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Rank rate quotes by their annual effective value")]
struct Args {
    /// Options as NAME=RATE pairs, e.g. "Banco A=24% NA/MV"
    #[arg(required = true)]
    options: Vec<String>,

    /// Ranking mode: credito (lowest EA wins) or inversion (highest EA wins)
    #[arg(long, default_value = "credito")]
    mode: String,

    /// Decimal places for EA values
    #[arg(long, default_value_t = 6)]
    precision: u32,

    /// Write the ranking to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode: CompareMode = args.mode.parse()?;

    let mut options = Vec::with_capacity(args.options.len());
    for pair in &args.options {
        let (name, rate_text) = pair
            .split_once('=')
            .with_context(|| format!("expected NAME=RATE, got {pair:?}"))?;
        let rate = rate_text
            .parse()
            .with_context(|| format!("invalid rate for {name:?}"))?;
        options.push(RateOption::new(name.trim(), rate));
    }

    let mut comparator = RateComparator::new(args.precision);
    let ranking = match mode {
        CompareMode::Credit => comparator.rank_for_credit(&options)?,
        CompareMode::Investment => comparator.rank_for_investment(&options)?,
    };
    log::info!("ranked {} options in {} mode", ranking.len(), mode);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        println!("{:>3}  {:<20} {:>12}", "#", "Nombre", "EA");
        println!("{}", "-".repeat(40));
        for row in &ranking {
            println!(
                "{:>3}  {:<20} {:>12.*}",
                row.rank,
                row.name,
                args.precision as usize,
                row.annual_effective
            );
        }
        if let Some(best) = comparator.best_option() {
            println!("\nMejor opcion: {}", best.name);
        }
    }

    if let Some(path) = &args.output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        for row in &ranking {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("ranking written to {}", path.display());
    }

    Ok(())
}
