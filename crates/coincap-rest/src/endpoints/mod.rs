//! API endpoint implementations

pub mod assets;
pub mod candles;
pub mod exchanges;
pub mod markets;
pub mod rates;

pub use assets::{Asset, AssetEndpoints, AssetHistory, AssetHistoryRequest, AssetsRequest};
pub use candles::{Candle, CandleEndpoints, CandlesRequest};
pub use exchanges::{Exchange, ExchangeEndpoints};
pub use markets::{Market, MarketEndpoints, MarketsRequest};
pub use rates::{Rate, RateEndpoints};

use coincap_types::Timestamp;

/// Incremental query-string builder.
///
/// Optional parameters left unset (`None`, an empty string, or zero for
/// limit/offset) are omitted entirely rather than sent as empty values.
#[derive(Debug, Default)]
pub(crate) struct Query(String);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pair(&mut self, key: &str, value: &str) {
        if !self.0.is_empty() {
            self.0.push('&');
        }
        self.0.push_str(key);
        self.0.push('=');
        self.0.push_str(value);
    }

    pub(crate) fn opt_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.pair(key, v);
            }
        }
    }

    pub(crate) fn opt_nonzero(&mut self, key: &str, value: Option<u32>) {
        if let Some(v) = value {
            if v > 0 {
                self.pair(key, &v.to_string());
            }
        }
    }

    pub(crate) fn opt_timestamp(&mut self, key: &str, value: Option<Timestamp>) {
        if let Some(ts) = value {
            self.pair(key, &ts.unix_millis().to_string());
        }
    }

    pub(crate) fn finish(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}
