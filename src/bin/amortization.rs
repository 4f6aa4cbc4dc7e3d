//! Print the amortization schedule of a fixed-installment loan
//!
//! Usage: cargo run --bin amortization -- --amount 10000000 --rate "24% NA/MV" --terms 12

use anyhow::Context;
use clap::Parser;
use rate_system::{CreditCalculator, InterestRate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Amortization schedule for a fixed-installment loan")]
struct Args {
    /// Loan amount
    #[arg(long)]
    amount: f64,

    /// Rate quote, e.g. "24% NA/MV" or "2% MV"
    #[arg(long)]
    rate: String,

    /// Number of installments
    #[arg(long)]
    terms: u32,

    /// Write the schedule to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rate: InterestRate = args.rate.parse().context("invalid rate")?;
    let calculator = CreditCalculator::default();

    let schedule = calculator.amortization_schedule(args.amount, &rate, args.terms)?;
    let installment = schedule.first().map(|row| row.payment).unwrap_or(0.0);

    println!(
        "Prestamo de {:.2} a {} cuotas ({})",
        args.amount, args.terms, rate
    );
    println!("Cuota fija: {installment:.2}\n");
    println!(
        "{:>7} {:>14} {:>12} {:>14} {:>14}",
        "Periodo", "Cuota", "Interes", "Abono", "Saldo"
    );
    for row in &schedule {
        println!(
            "{:>7} {:>14.2} {:>12.2} {:>14.2} {:>14.2}",
            row.period, row.payment, row.interest, row.principal, row.balance
        );
    }

    if let Some(path) = &args.output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        for row in &schedule {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("schedule written to {}", path.display());
    }

    Ok(())
}
