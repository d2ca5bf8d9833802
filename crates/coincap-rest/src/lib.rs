//! REST API client for the CoinCap V2 market data API
//!
//! This crate provides a typed client for CoinCap's public REST endpoints:
//! assets, asset history, rates, exchanges, markets, and candles.
//!
//! Every response arrives in the same envelope (the payload under a top
//! level `data` key plus a capture `timestamp` in epoch milliseconds), and
//! every call returns the decoded records together with that timestamp.
//! Financial figures are decimal strings on the wire and stay strings in the
//! record types; accessor methods parse them to [`rust_decimal::Decimal`]
//! on demand so precision is never lost to a float.
//!
//! # Example
//!
//! ```no_run
//! use coincap_rest::{AssetsRequest, CoinCapClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinCapClient::new();
//!
//!     let params = AssetsRequest {
//!         search: Some("BTC".to_string()),
//!         limit: Some(5),
//!         ..Default::default()
//!     };
//!     let (assets, captured_at) = client.get_assets(&params).await?;
//!     for asset in &assets {
//!         println!("{}: {:?} USD", asset.symbol, asset.price());
//!     }
//!     println!("as of {}", captured_at);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The HTTP stack sits behind the [`transport::HttpTransport`] trait, so the
//! whole client can run against an in-process stub; no test needs a network.
//! The API itself is public and unauthenticated.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

mod envelope;

// Re-export main types
pub use client::{ClientConfig, CoinCapClient};
pub use error::{RestError, RestResult};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

// Re-export endpoint types
pub use endpoints::{
    Asset, AssetHistory, AssetHistoryRequest, AssetsRequest, Candle, CandlesRequest, Exchange,
    Market, MarketsRequest, Rate,
};

// Re-export the shared leaf types
pub use coincap_types::{Interval, Timestamp};
