//! Asset endpoints
//!
//! `/assets` and its children: asset listings, single-asset lookup, and USD
//! price history.

use super::Query;
use crate::client::CoinCapClient;
use crate::error::RestResult;
use coincap_types::{Interval, Timestamp};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Asset endpoints
pub struct AssetEndpoints<'a> {
    client: &'a CoinCapClient,
}

impl<'a> AssetEndpoints<'a> {
    pub(crate) fn new(client: &'a CoinCapClient) -> Self {
        Self { client }
    }

    /// List assets filtered by the request's search criteria.
    ///
    /// `GET /assets`
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &AssetsRequest) -> RestResult<(Vec<Asset>, Timestamp)> {
        let mut query = Query::new();
        query.opt_str("search", params.search.as_deref());
        query.opt_nonzero("limit", params.limit);
        query.opt_nonzero("offset", params.offset);

        debug!("Fetching assets");
        self.client.fetch("assets", query.finish()).await
    }

    /// Get one asset by its CoinCap id.
    ///
    /// `GET /assets/{id}`
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> RestResult<(Asset, Timestamp)> {
        debug!("Fetching asset");
        self.client.fetch(&format!("assets/{id}"), None).await
    }

    /// Get USD price history for an asset.
    ///
    /// If no interval is given, one hour (`h1`) is used.
    ///
    /// `GET /assets/{id}/history`
    #[instrument(skip(self, params))]
    pub async fn history(
        &self,
        id: &str,
        params: &AssetHistoryRequest,
    ) -> RestResult<(Vec<AssetHistory>, Timestamp)> {
        let interval = params.interval.unwrap_or(Interval::Hour);

        let mut query = Query::new();
        query.pair("interval", interval.as_str());
        query.opt_timestamp("start", params.start);
        query.opt_timestamp("end", params.end);
        query.opt_nonzero("limit", params.limit);
        query.opt_nonzero("offset", params.offset);

        debug!(%interval, "Fetching asset history");
        self.client
            .fetch(&format!("assets/{id}/history"), query.finish())
            .await
    }
}

/// Query parameters for the `/assets` listing
#[derive(Debug, Clone, Default)]
pub struct AssetsRequest {
    /// Search by symbol (BTC) or asset id (bitcoin)
    pub search: Option<String>,
    /// Maximum number of results to return
    pub limit: Option<u32>,
    /// Skip the first N entries of the result set
    pub offset: Option<u32>,
}

/// Query parameters for `/assets/{id}/history`
#[derive(Debug, Clone, Default)]
pub struct AssetHistoryRequest {
    /// Point-in-time interval; defaults to [`Interval::Hour`] when unset.
    /// The endpoint accepts m1, m15, h1, and d1.
    pub interval: Option<Interval>,
    /// Only return history at or after this instant
    pub start: Option<Timestamp>,
    /// Only return history at or before this instant
    pub end: Option<Timestamp>,
    /// Maximum number of results to return
    pub limit: Option<u32>,
    /// Skip the first N entries of the result set
    pub offset: Option<u32>,
}

/// One CoinCap asset such as Bitcoin.
///
/// Numeric fields are decimal strings exactly as the API transmits them;
/// use the accessors to parse on demand without losing precision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique asset identifier (e.g. "bitcoin")
    pub id: String,
    /// Rank by market cap
    pub rank: String,
    /// Most common symbol for the asset (e.g. "BTC")
    pub symbol: String,
    /// Proper name of the asset
    pub name: String,
    /// Available supply for trading
    pub supply: String,
    /// Total quantity of asset issuable, if capped
    pub max_supply: Option<String>,
    /// Supply times price, in USD
    pub market_cap_usd: String,
    /// Volume transacted in the last 24 hours, in USD
    pub volume_usd_24_hr: String,
    /// Volume-weighted price in USD
    pub price_usd: String,
    /// Price change over the last 24 hours, percent
    pub change_percent_24_hr: String,
    /// Volume-weighted average price over the last 24 hours
    pub vwap_24_hr: Option<String>,
}

impl Asset {
    /// Current USD price
    pub fn price(&self) -> Option<Decimal> {
        self.price_usd.parse().ok()
    }

    /// Market capitalization in USD
    pub fn market_cap(&self) -> Option<Decimal> {
        self.market_cap_usd.parse().ok()
    }

    /// 24-hour price change in percent
    pub fn change_percent(&self) -> Option<Decimal> {
        self.change_percent_24_hr.parse().ok()
    }
}

/// USD price of an asset at one instant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistory {
    /// Volume-weighted price in USD
    pub price_usd: String,
    /// Instant the price was recorded
    pub time: Timestamp,
}

impl AssetHistory {
    /// USD price at this point in time
    pub fn price(&self) -> Option<Decimal> {
        self.price_usd.parse().ok()
    }
}
