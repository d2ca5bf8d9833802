//! Rate endpoints
//!
//! `/rates`: USD conversion rates for crypto and fiat currencies. Fiat rates
//! are sourced upstream from OpenExchangeRates.org.

use crate::client::CoinCapClient;
use crate::error::RestResult;
use coincap_types::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Rate endpoints
pub struct RateEndpoints<'a> {
    client: &'a CoinCapClient,
}

impl<'a> RateEndpoints<'a> {
    pub(crate) fn new(client: &'a CoinCapClient) -> Self {
        Self { client }
    }

    /// List conversion rates for all tracked currencies, standardized in USD.
    ///
    /// `GET /rates`
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<(Vec<Rate>, Timestamp)> {
        debug!("Fetching rates");
        self.client.fetch("rates", None).await
    }

    /// Get the USD rate for one currency by id.
    ///
    /// `GET /rates/{id}`
    #[instrument(skip(self))]
    pub async fn by_id(&self, id: &str) -> RestResult<(Rate, Timestamp)> {
        debug!("Fetching rate");
        self.client.fetch(&format!("rates/{id}"), None).await
    }
}

/// USD exchange rate for one currency, crypto or fiat
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Unique identifier for the asset or fiat currency
    pub id: String,
    /// Most common symbol (e.g. "BTC", "EUR")
    pub symbol: String,
    /// Currency glyph, if one exists (e.g. "€")
    pub currency_symbol: Option<String>,
    /// Conversion rate to USD as a decimal string
    pub rate_usd: String,
    /// Kind of currency: "fiat" or "crypto"
    #[serde(rename = "type")]
    pub rate_type: String,
}

impl Rate {
    /// Conversion rate to USD
    pub fn rate(&self) -> Option<Decimal> {
        self.rate_usd.parse().ok()
    }

    /// Returns true if this is a fiat currency
    pub fn is_fiat(&self) -> bool {
        self.rate_type == "fiat"
    }
}
