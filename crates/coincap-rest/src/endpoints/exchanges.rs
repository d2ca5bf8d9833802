//! Exchange endpoints
//!
//! `/exchanges`: exchanges tracked by CoinCap, their relative rank and
//! volume, and whether a trade socket is available.

use crate::client::CoinCapClient;
use crate::error::RestResult;
use coincap_types::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Exchange endpoints
pub struct ExchangeEndpoints<'a> {
    client: &'a CoinCapClient,
}

impl<'a> ExchangeEndpoints<'a> {
    pub(crate) fn new(client: &'a CoinCapClient) -> Self {
        Self { client }
    }

    /// List all tracked exchanges.
    ///
    /// `GET /exchanges`
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<(Vec<Exchange>, Timestamp)> {
        debug!("Fetching exchanges");
        self.client.fetch("exchanges", None).await
    }

    /// Get one exchange by its unique id.
    ///
    /// `GET /exchanges/{id}`
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> RestResult<(Exchange, Timestamp)> {
        debug!("Fetching exchange");
        self.client.fetch(&format!("exchanges/{id}"), None).await
    }
}

/// One cryptocurrency exchange
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    /// Unique identifier for the exchange
    pub id: String,
    /// Proper name of the exchange
    pub name: String,
    /// Rank in terms of total volume compared to other exchanges
    pub rank: String,
    /// Percent of total daily volume across all exchanges
    pub percent_total_volume: String,
    /// Daily volume in USD
    #[serde(rename = "volumeUSD")]
    pub volume_usd: String,
    /// Number of trading pairs offered
    pub trading_pairs: String,
    /// Whether a trade socket is available on this exchange
    pub socket: bool,
    /// When this information was last updated
    pub updated: Timestamp,
}

impl Exchange {
    /// Daily volume in USD
    pub fn volume(&self) -> Option<Decimal> {
        self.volume_usd.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exchange_deserializes() {
        let json = r#"{
            "id": "binance",
            "name": "Binance",
            "rank": "1",
            "percentTotalVolume": "24.0906565665041088",
            "volumeUSD": "1165961114.4210815948983444",
            "tradingPairs": "385",
            "socket": true,
            "updated": 1536343139514
        }"#;

        let exchange: Exchange = serde_json::from_str(json).unwrap();
        assert_eq!(exchange.id, "binance");
        assert!(exchange.socket);
        assert_eq!(exchange.updated.unix_millis(), 1536343139514);
        assert_eq!(exchange.volume(), Some(dec!(1165961114.4210815948983444)));
    }

    #[test]
    fn test_exchange_rejects_malformed_updated() {
        let json = r#"{
            "id": "binance",
            "name": "Binance",
            "rank": "1",
            "percentTotalVolume": "24",
            "volumeUSD": "1",
            "tradingPairs": "385",
            "socket": true,
            "updated": "yesterday"
        }"#;

        assert!(serde_json::from_str::<Exchange>(json).is_err());
    }
}
