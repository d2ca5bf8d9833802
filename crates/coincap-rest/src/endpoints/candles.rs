//! Candle endpoints
//!
//! `/candles`: OHLCV history for one market. Unlike the other endpoints,
//! the API requires exchange, base, quote, and interval, so the request is
//! validated locally before any network call.

use super::Query;
use crate::client::CoinCapClient;
use crate::error::{RestError, RestResult};
use coincap_types::{Interval, Timestamp};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Candle endpoints
pub struct CandleEndpoints<'a> {
    client: &'a CoinCapClient,
}

impl<'a> CandleEndpoints<'a> {
    pub(crate) fn new(client: &'a CoinCapClient) -> Self {
        Self { client }
    }

    /// Get candle data for the market described by the request.
    ///
    /// Fails with [`RestError::MissingParameter`] before performing any
    /// request if exchange, base, quote, or interval is unset.
    ///
    /// `GET /candles`
    #[instrument(skip(self, params))]
    pub async fn list(&self, params: &CandlesRequest) -> RestResult<(Vec<Candle>, Timestamp)> {
        let interval = params.validate()?;

        let mut query = Query::new();
        query.pair("exchange", &params.exchange_id);
        query.pair("baseId", &params.base_id);
        query.pair("quoteId", &params.quote_id);
        query.pair("interval", interval.as_str());
        query.opt_timestamp("start", params.start);
        query.opt_timestamp("end", params.end);
        query.opt_nonzero("limit", params.limit);
        query.opt_nonzero("offset", params.offset);

        debug!(%interval, "Fetching candles");
        self.client.fetch("candles", query.finish()).await
    }
}

/// Parameters for a `/candles` query.
///
/// `exchange_id`, `base_id`, `quote_id`, and `interval` are required by the
/// API; the rest narrow the result window.
#[derive(Debug, Clone, Default)]
pub struct CandlesRequest {
    /// Exchange the market lives on
    pub exchange_id: String,
    /// Id of the base asset
    pub base_id: String,
    /// Id of the quote asset
    pub quote_id: String,
    /// Candle interval
    pub interval: Option<Interval>,
    /// Only candles starting at or after this instant
    pub start: Option<Timestamp>,
    /// Only candles starting at or before this instant
    pub end: Option<Timestamp>,
    /// Maximum number of results to return (max 2000)
    pub limit: Option<u32>,
    /// Skip the first N entries of the result set
    pub offset: Option<u32>,
}

impl CandlesRequest {
    /// Check the required fields, returning the interval to query with
    fn validate(&self) -> Result<Interval, RestError> {
        if self.exchange_id.is_empty() {
            return Err(RestError::MissingParameter("exchange"));
        }
        if self.base_id.is_empty() {
            return Err(RestError::MissingParameter("baseId"));
        }
        if self.quote_id.is_empty() {
            return Err(RestError::MissingParameter("quoteId"));
        }
        self.interval.ok_or(RestError::MissingParameter("interval"))
    }
}

/// Market performance for one time period
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Price (quote) of the first transaction in the period
    pub open: String,
    /// Top price (quote) the base traded at during the period
    pub high: String,
    /// Bottom price (quote) the base traded at during the period
    pub low: String,
    /// Price (quote) of the last transaction in the period
    pub close: String,
    /// Amount of base asset traded during the period
    pub volume: String,
    /// Start of the period
    pub period: Timestamp,
}

impl Candle {
    /// Opening price
    pub fn open_price(&self) -> Option<Decimal> {
        self.open.parse().ok()
    }

    /// Closing price
    pub fn close_price(&self) -> Option<Decimal> {
        self.close.parse().ok()
    }

    /// High minus low over the period
    pub fn range(&self) -> Option<Decimal> {
        let high: Decimal = self.high.parse().ok()?;
        let low: Decimal = self.low.parse().ok()?;
        Some(high - low)
    }
}
