//! Demo 2: Price History
//!
//! Showcases: asset history with a time window, the epoch-millis codec
//!
//! Run: cargo run --bin price_history [asset-id]

use chrono::{Duration, Utc};
use coincap_rest::{AssetHistoryRequest, CoinCapClient};
use coincap_types::{Interval, Timestamp};
use colored::*;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let asset_id = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  PRICE HISTORY".cyan().bold());
    println!("{}", format!("  CoinCap SDK Demo - {asset_id}, hourly, last 24h").cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let now = Utc::now();
    let params = AssetHistoryRequest {
        interval: Some(Interval::Hour),
        start: Some(Timestamp::from(now - Duration::hours(24))),
        end: Some(Timestamp::from(now)),
        ..Default::default()
    };

    let client = CoinCapClient::new();
    let (history, captured_at) = client.get_asset_history(&asset_id, &params).await?;

    if history.is_empty() {
        println!("  {}", "no history returned".yellow());
        return Ok(());
    }

    let mut low: Option<Decimal> = None;
    let mut high: Option<Decimal> = None;

    for point in &history {
        let Some(price) = point.price() else { continue };
        low = Some(low.map_or(price, |l| l.min(price)));
        high = Some(high.map_or(price, |h| h.max(price)));
        println!("  {}  {:>14.4}", point.time, price);
    }

    println!();
    if let (Some(low), Some(high)) = (low, high) {
        println!(
            "  {} points, low {} / high {}",
            history.len(),
            format!("{low:.4}").red(),
            format!("{high:.4}").green()
        );
    }
    println!("  as of {}", captured_at.to_string().white().dimmed());

    Ok(())
}
