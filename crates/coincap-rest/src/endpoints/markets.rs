//! Market endpoints
//!
//! `/markets`: current data for individual markets (one base/quote pair on
//! one exchange). For historical market data use the candle endpoint.

use super::Query;
use crate::client::CoinCapClient;
use crate::error::RestResult;
use coincap_types::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Market endpoints
pub struct MarketEndpoints<'a> {
    client: &'a CoinCapClient,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(client: &'a CoinCapClient) -> Self {
        Self { client }
    }

    /// List markets matching the request's filters.
    ///
    /// `GET /markets`
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &MarketsRequest) -> RestResult<(Vec<Market>, Timestamp)> {
        let mut query = Query::new();
        query.opt_str("exchangeId", params.exchange_id.as_deref());
        query.opt_str("baseSymbol", params.base_symbol.as_deref());
        query.opt_str("baseId", params.base_id.as_deref());
        query.opt_str("quoteSymbol", params.quote_symbol.as_deref());
        query.opt_str("quoteId", params.quote_id.as_deref());
        query.opt_str("assetSymbol", params.asset_symbol.as_deref());
        query.opt_str("assetId", params.asset_id.as_deref());
        query.opt_nonzero("limit", params.limit);
        query.opt_nonzero("offset", params.offset);

        debug!("Fetching markets");
        self.client.fetch("markets", query.finish()).await
    }
}

/// Filters for a `/markets` query
#[derive(Debug, Clone, Default)]
pub struct MarketsRequest {
    /// Only markets on this exchange
    pub exchange_id: Option<String>,
    /// Only markets with this base symbol
    pub base_symbol: Option<String>,
    /// Only markets with this base asset id
    pub base_id: Option<String>,
    /// Only markets with this quote symbol
    pub quote_symbol: Option<String>,
    /// Only markets with this quote asset id
    pub quote_id: Option<String>,
    /// Only markets involving this symbol on either side
    pub asset_symbol: Option<String>,
    /// Only markets involving this asset id on either side
    pub asset_id: Option<String>,
    /// Maximum number of results to return (max 2000)
    pub limit: Option<u32>,
    /// Skip the first N entries of the result set
    pub offset: Option<u32>,
}

/// One market: a base/quote pair on one exchange
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Exchange the market lives on
    pub exchange_id: String,
    /// Rank in terms of volume transacted in this market
    pub rank: String,
    /// Symbol of the asset being purchased
    pub base_symbol: String,
    /// Id of the asset being purchased
    pub base_id: String,
    /// Symbol of the asset used to purchase the base
    pub quote_symbol: String,
    /// Id of the asset used to purchase the base
    pub quote_id: String,
    /// Amount of quote asset traded for one unit of base asset
    pub price_quote: String,
    /// Quote price translated to USD
    pub price_usd: String,
    /// Volume transacted in this market in the last 24 hours, in USD
    pub volume_usd_24_hr: String,
    /// Share of this exchange's daily volume transacted in this market
    pub percent_exchange_volume: String,
    /// Number of trades in this market in the last 24 hours
    pub trades_count_24_hr: Option<String>,
    /// Last time information was received from this market
    pub updated: Timestamp,
}

impl Market {
    /// Quote price in USD
    pub fn price(&self) -> Option<Decimal> {
        self.price_usd.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_deserializes() {
        let json = r#"{
            "exchangeId": "poloniex",
            "rank": "86",
            "baseSymbol": "ETH",
            "baseId": "ethereum",
            "quoteSymbol": "BTC",
            "quoteId": "bitcoin",
            "priceQuote": "0.0333469900000000",
            "priceUsd": "230.3180909738553363",
            "volumeUsd24Hr": "1231725.5297493741437342",
            "percentExchangeVolume": "12.0989045745013958",
            "tradesCount24Hr": "1648",
            "updated": 1536343674662
        }"#;

        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.exchange_id, "poloniex");
        assert_eq!(market.base_id, "ethereum");
        assert_eq!(market.updated.unix_millis(), 1536343674662);
        assert_eq!(market.price(), Some(dec!(230.3180909738553363)));
    }

    #[test]
    fn test_market_tolerates_null_trade_count() {
        let json = r#"{
            "exchangeId": "kraken",
            "rank": "1",
            "baseSymbol": "BTC",
            "baseId": "bitcoin",
            "quoteSymbol": "USD",
            "quoteId": "united-states-dollar",
            "priceQuote": "6927.1",
            "priceUsd": "6927.1",
            "volumeUsd24Hr": "1",
            "percentExchangeVolume": "1",
            "tradesCount24Hr": null,
            "updated": 1536343674662
        }"#;

        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.trades_count_24_hr, None);
    }
}
