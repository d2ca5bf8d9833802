//! Main REST client implementation

use crate::endpoints::{
    AssetEndpoints, CandleEndpoints, ExchangeEndpoints, MarketEndpoints, RateEndpoints,
};
use crate::envelope;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use coincap_types::Timestamp;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Production API root
const DEFAULT_BASE_URL: &str = "https://api.coincap.io/v2";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CoinCap REST API client
///
/// Every call performs exactly one request/response round trip and returns
/// the decoded records together with the capture time the server stamped on
/// the response. The client can be shared across concurrent callers; each
/// call is independent.
///
/// # Example
///
/// ```no_run
/// use coincap_rest::{AssetsRequest, CoinCapClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinCapClient::new();
///     let (assets, captured_at) = client.get_assets(&AssetsRequest::default()).await?;
///     println!("{} assets as of {}", assets.len(), captured_at);
///
///     let (bitcoin, _) = client.get_asset("bitcoin").await?;
///     println!("BTC: {:?}", bitcoin.price());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinCapClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl CoinCapClient {
    /// Create a client against the production API with the default transport
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = ReqwestTransport::with_timeout(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref(),
        );

        info!("Created CoinCap REST client");

        Self {
            transport: Arc::new(transport),
            base_url: config.base_url,
        }
    }

    /// Create a client around an injected transport
    ///
    /// This is how tests substitute an in-process stub for the HTTP stack.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// The API root every request is issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a different API root (e.g. a test double)
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Perform one GET round trip and unwrap the response envelope.
    ///
    /// Shared by every endpoint: builds the URL, delegates the exchange to
    /// the transport, validates the envelope, then deserializes the payload
    /// into the endpoint's shape. A payload that fails to deserialize is
    /// reported as [`RestError::MalformedResponse`], never ignored.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<String>,
    ) -> RestResult<(T, Timestamp)> {
        let url = match &query {
            Some(q) => format!("{}/{}?{}", self.base_url, path, q),
            None => format!("{}/{}", self.base_url, path),
        };
        debug!(%url, "issuing request");

        let response = self.transport.send(HttpRequest::get(url)).await?;
        let (payload, captured_at) = envelope::decode(response.status, &response.body)?;
        let records = serde_json::from_str(payload.get())
            .map_err(|e| RestError::MalformedResponse(e.to_string()))?;

        Ok((records, captured_at))
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Asset endpoints (`/assets`)
    pub fn assets(&self) -> AssetEndpoints<'_> {
        AssetEndpoints::new(self)
    }

    /// Rate endpoints (`/rates`)
    pub fn rates(&self) -> RateEndpoints<'_> {
        RateEndpoints::new(self)
    }

    /// Exchange endpoints (`/exchanges`)
    pub fn exchanges(&self) -> ExchangeEndpoints<'_> {
        ExchangeEndpoints::new(self)
    }

    /// Market endpoints (`/markets`)
    pub fn markets(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Candle endpoints (`/candles`)
    pub fn candles(&self) -> CandleEndpoints<'_> {
        CandleEndpoints::new(self)
    }

    // ========================================================================
    // Facade methods
    // ========================================================================

    /// List assets matching the request's search criteria
    pub async fn get_assets(
        &self,
        params: &crate::endpoints::AssetsRequest,
    ) -> RestResult<(Vec<crate::endpoints::Asset>, Timestamp)> {
        self.assets().list(params).await
    }

    /// Get one asset by its CoinCap id (e.g. "bitcoin")
    pub async fn get_asset(
        &self,
        id: &str,
    ) -> RestResult<(crate::endpoints::Asset, Timestamp)> {
        self.assets().by_id(id).await
    }

    /// Get USD price history for an asset; interval defaults to one hour
    pub async fn get_asset_history(
        &self,
        id: &str,
        params: &crate::endpoints::AssetHistoryRequest,
    ) -> RestResult<(Vec<crate::endpoints::AssetHistory>, Timestamp)> {
        self.assets().history(id, params).await
    }

    /// List USD conversion rates for all tracked currencies
    pub async fn get_rates(&self) -> RestResult<(Vec<crate::endpoints::Rate>, Timestamp)> {
        self.rates().list().await
    }

    /// Get the USD rate for one currency by id
    pub async fn get_rate(&self, id: &str) -> RestResult<(crate::endpoints::Rate, Timestamp)> {
        self.rates().by_id(id).await
    }

    /// List all tracked exchanges
    pub async fn get_exchanges(
        &self,
    ) -> RestResult<(Vec<crate::endpoints::Exchange>, Timestamp)> {
        self.exchanges().list().await
    }

    /// Get one exchange by id
    pub async fn get_exchange(
        &self,
        id: &str,
    ) -> RestResult<(crate::endpoints::Exchange, Timestamp)> {
        self.exchanges().by_id(id).await
    }

    /// List markets matching the request's filters
    pub async fn get_markets(
        &self,
        params: &crate::endpoints::MarketsRequest,
    ) -> RestResult<(Vec<crate::endpoints::Market>, Timestamp)> {
        self.markets().list(params).await
    }

    /// Get candle data for one market; exchange, base, quote, and interval
    /// are required
    pub async fn get_candles(
        &self,
        params: &crate::endpoints::CandlesRequest,
    ) -> RestResult<(Vec<crate::endpoints::Candle>, Timestamp)> {
        self.candles().list(params).await
    }
}

impl Default for CoinCapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinCapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinCapClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
