//! Rate System CLI
//!
//! Demo driver: ranks a set of loan offers by annual effective rate,
//! prices the installment of the winning offer, and writes a growth
//! series comparison to CSV.

use rate_system::{
    CompareMode, CreditCalculator, InterestRate, RateComparator, RateOption, Standardizer,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Rate System v0.1.0");
    println!("==================\n");

    let offers = vec![
        RateOption::new("Banco A", parse_rate("24% NA/MV")),
        RateOption::new("Banco B", parse_rate("1.8% MV")),
        RateOption::new("Banco C", parse_rate("30% NA/MV")),
    ];

    println!("Ofertas de credito:");
    for offer in &offers {
        println!("  {:<10} {}", offer.name, offer.rate);
    }
    println!();

    // Rank for credit: lowest EA wins
    let mut comparator = RateComparator::default();
    let ranking = comparator
        .rank_for_credit(&offers)
        .expect("ranking failed");

    println!("{:>3}  {:<10} {:>10}", "#", "Nombre", "EA");
    println!("{}", "-".repeat(28));
    for row in &ranking {
        println!(
            "{:>3}  {:<10} {:>10.6}",
            row.rank, row.name, row.annual_effective
        );
    }

    let best = comparator.best_option().expect("ranking is not empty");
    println!("\nMejor opcion: {} ({:.6} EA)\n", best.name, best.annual_effective);

    // Price a 12-month loan at the winning rate
    let amount = 10_000_000.0;
    let terms = 12;
    let best_rate = offers
        .iter()
        .find(|offer| offer.name == best.name)
        .expect("best offer exists")
        .rate;

    let calculator = CreditCalculator::default();
    let installment = calculator
        .fixed_installment(amount, &best_rate, terms)
        .expect("installment failed");
    println!(
        "Prestamo de {amount:.2} a {terms} cuotas con {best_rate}: cuota fija {installment:.2}\n"
    );

    // Growth of a 1,000,000 deposit: simple vs compound interest
    let standardizer = Standardizer::default();
    let deposit = 1_000_000.0;
    let quarterly = parse_rate("6% TV");
    let simple = standardizer
        .simple_interest_series(deposit, &quarterly, 8)
        .expect("series failed");
    let compound = standardizer
        .compound_interest_series(deposit, &quarterly, 8)
        .expect("series failed");

    println!("Crecimiento de {deposit:.2} al {quarterly} (8 trimestres):");
    println!("{:>7} {:>14} {:>14}", "Periodo", "Simple", "Compuesto");
    for (simple_row, compound_row) in simple.iter().zip(&compound) {
        println!(
            "{:>7} {:>14.2} {:>14.2}",
            simple_row.period, simple_row.value, compound_row.value
        );
    }

    // Write the series comparison to CSV
    let csv_path = "series_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "Periodo,Simple,Compuesto").unwrap();
    for (simple_row, compound_row) in simple.iter().zip(&compound) {
        writeln!(
            file,
            "{},{:.2},{:.2}",
            simple_row.period, simple_row.value, compound_row.value
        )
        .unwrap();
    }
    println!("\nSeries escritas en: {csv_path}");

    // Best investment among standardized options
    let investments = vec![
        RateOption::new("CDT X", parse_rate("10% EA")),
        RateOption::new("Fondo Y", parse_rate("0.8% MV")),
    ];
    if let Some(best) = standardizer
        .best_rate(&investments, CompareMode::Investment)
        .expect("standardization failed")
    {
        println!(
            "\nMejor inversion: {} ({:.6} EA)",
            best.name, best.annual_effective
        );
    }
}

fn parse_rate(text: &str) -> InterestRate {
    text.parse().expect("valid rate literal")
}
