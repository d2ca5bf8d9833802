//! Demo 3: Rate Board
//!
//! Showcases: conversion rates, fiat/crypto split
//!
//! Run: cargo run --bin rate_board

use coincap_rest::{CoinCapClient, Rate};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  RATE BOARD".cyan().bold());
    println!("{}", "  CoinCap SDK Demo - USD Conversion Rates".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CoinCapClient::new();
    let (rates, captured_at) = client.get_rates().await?;

    let (fiat, crypto): (Vec<&Rate>, Vec<&Rate>) = rates.iter().partition(|r| r.is_fiat());

    print_section("FIAT", &fiat);
    println!();
    print_section("CRYPTO", &crypto);

    println!();
    println!(
        "  {} rates total, as of {}",
        rates.len(),
        captured_at.to_string().white().dimmed()
    );

    Ok(())
}

fn print_section(title: &str, rates: &[&Rate]) {
    println!("  {}", title.white().bold());
    println!("  {}", "─".repeat(48));

    for rate in rates.iter().take(10) {
        let glyph = rate.currency_symbol.as_deref().unwrap_or(" ");
        let usd = rate
            .rate()
            .map(|r| format!("{r:.6}"))
            .unwrap_or_else(|| rate.rate_usd.clone());
        println!("  {:<10} {:<4} {:>20}", rate.symbol.cyan(), glyph, usd);
    }
}
