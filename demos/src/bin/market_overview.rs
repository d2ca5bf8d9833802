//! Demo 1: Market Overview
//!
//! Showcases: asset listing, decimal accessors, capture timestamps
//!
//! Run: cargo run --bin market_overview

use coincap_rest::{AssetsRequest, CoinCapClient};
use colored::*;
use rust_decimal::Decimal;

const TOP_N: u32 = 15;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  MARKET OVERVIEW".cyan().bold());
    println!("{}", "  CoinCap SDK Demo - Top Assets by Market Cap".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CoinCapClient::new();
    let params = AssetsRequest {
        limit: Some(TOP_N),
        ..Default::default()
    };
    let (assets, captured_at) = client.get_assets(&params).await?;

    println!(
        "  {:<6} {:<8} {:<20} {:>14} {:>10}",
        "RANK".white().bold(),
        "SYMBOL".white().bold(),
        "NAME".white().bold(),
        "PRICE USD".white().bold(),
        "24H".white().bold()
    );
    println!("  {}", "─".repeat(62));

    for asset in &assets {
        let price = asset
            .price()
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());

        let change = asset.change_percent().unwrap_or(Decimal::ZERO);
        let change_col = if change > Decimal::ZERO {
            format!("{:+.2}%", change).green()
        } else if change < Decimal::ZERO {
            format!("{:+.2}%", change).red()
        } else {
            format!("{:+.2}%", change).white()
        };

        println!(
            "  {:<6} {:<8} {:<20} {:>14} {:>10}",
            asset.rank,
            asset.symbol.cyan(),
            asset.name,
            price,
            change_col
        );
    }

    println!();
    println!("  as of {}", captured_at.to_string().white().dimmed());

    Ok(())
}
