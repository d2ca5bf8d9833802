//! Common test utilities and fixtures for integration tests
//!
//! Fixture bodies mirror live CoinCap V2 responses; the stub transport
//! stands in for the HTTP stack so no test touches the network.

use async_trait::async_trait;
use coincap_rest::{CoinCapClient, HttpRequest, HttpResponse, HttpTransport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Base URL every test client is pointed at
pub const STUB_BASE_URL: &str = "http://stub.test/v2";

/// `/assets` fixture: two results for a "BTC" search
pub const ASSETS_BODY: &str = r#"{
    "data": [
        {
            "id": "bitcoin-private",
            "rank": "44",
            "symbol": "BTCP",
            "name": "Bitcoin Private",
            "supply": "20741405.0000000000000000",
            "maxSupply": "22870000.0000000000000000",
            "marketCapUsd": "47259358.9411264150000000",
            "volumeUsd24Hr": "65090.5192810354332515",
            "priceUsd": "2.2785155038498130",
            "changePercent24Hr": "-3.4883117874858815",
            "vwap24Hr": "2.3375717216181538"
        },
        {
            "id": "bitcoin",
            "rank": "1",
            "symbol": "BTC",
            "name": "Bitcoin",
            "supply": "17193925.0000000000000000",
            "maxSupply": "21000000.0000000000000000",
            "marketCapUsd": "119150835874.4699281625807300",
            "volumeUsd24Hr": "2927959461.1750323310959460",
            "priceUsd": "6929.8217756835584756",
            "changePercent24Hr": "-0.8101417214350335",
            "vwap24Hr": "7175.0663247679233209"
        }
    ],
    "timestamp": 1536336916333
}"#;

/// `/assets/bitcoin` fixture
pub const ASSET_BODY: &str = r#"{
    "data": {
        "id": "bitcoin",
        "rank": "1",
        "symbol": "BTC",
        "name": "Bitcoin",
        "supply": "17193925.0000000000000000",
        "maxSupply": "21000000.0000000000000000",
        "marketCapUsd": "119150835874.4699281625807300",
        "volumeUsd24Hr": "2927959461.1750323310959460",
        "priceUsd": "6929.8217756835584756",
        "changePercent24Hr": "-0.8101417214350335",
        "vwap24Hr": "7175.0663247679233209"
    },
    "timestamp": 1536336916333
}"#;

/// `/assets/bitcoin/history` fixture
pub const HISTORY_BODY: &str = r#"{
    "data": [
        { "priceUsd": "6379.3975182298770940", "time": 1530403200000 },
        { "priceUsd": "6397.1133426161618176", "time": 1530406800000 },
        { "priceUsd": "6412.4164728414423728", "time": 1530410400000 }
    ],
    "timestamp": 1536337428268
}"#;

/// `/rates` fixture
pub const RATES_BODY: &str = r#"{
    "data": [
        {
            "id": "romanian-leu",
            "symbol": "RON",
            "currencySymbol": "lei",
            "rateUsd": "0.2508224993702837",
            "type": "fiat"
        },
        {
            "id": "bitcoin",
            "symbol": "BTC",
            "currencySymbol": null,
            "rateUsd": "6929.8217756835584756",
            "type": "crypto"
        }
    ],
    "timestamp": 1536340092583
}"#;

/// `/rates/bitcoin` fixture
pub const RATE_BODY: &str = r#"{
    "data": {
        "id": "bitcoin",
        "symbol": "BTC",
        "currencySymbol": null,
        "rateUsd": "6929.8217756835584756",
        "type": "crypto"
    },
    "timestamp": 1536340092583
}"#;

/// `/exchanges` fixture
pub const EXCHANGES_BODY: &str = r#"{
    "data": [
        {
            "id": "binance",
            "name": "Binance",
            "rank": "1",
            "percentTotalVolume": "24.0906565665041088",
            "volumeUSD": "1165961114.4210815948983444",
            "tradingPairs": "385",
            "socket": true,
            "updated": 1536343139514
        },
        {
            "id": "poloniex",
            "name": "Poloniex",
            "rank": "15",
            "percentTotalVolume": "0.9932055127805904",
            "volumeUSD": "48068954.5318410914375459",
            "tradingPairs": "98",
            "socket": false,
            "updated": 1536343139515
        }
    ],
    "timestamp": 1536343139519
}"#;

/// `/markets` fixture
pub const MARKETS_BODY: &str = r#"{
    "data": [
        {
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
        }
    ],
    "timestamp": 1536343674687
}"#;

/// `/candles` fixture
pub const CANDLES_BODY: &str = r#"{
    "data": [
        {
            "open": "0.03373000",
            "high": "0.03380000",
            "low": "0.03373000",
            "close": "0.03380000",
            "volume": "31.24632000",
            "period": 1536343500000
        },
        {
            "open": "0.03380000",
            "high": "0.03384000",
            "low": "0.03378000",
            "close": "0.03382000",
            "volume": "18.90117000",
            "period": 1536343800000
        }
    ],
    "timestamp": 1536344100000
}"#;

/// In-process transport stub: serves queued responses, records every
/// request it is handed.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub preloaded with one 200 response
    pub fn serving(body: &str) -> Arc<Self> {
        let stub = Self::new();
        stub.push_success(body);
        Arc::new(stub)
    }

    pub fn push_success(&self, body: &str) {
        self.push_response(HttpResponse::ok(body.as_bytes().to_vec()));
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.push_response(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
            headers: Vec::new(),
        });
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// URLs of the requests performed so far
    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no queued response".into())))
    }
}

/// A client wired to the given stub and pointed at [`STUB_BASE_URL`]
pub fn stub_client(transport: Arc<StubTransport>) -> CoinCapClient {
    let mut client = CoinCapClient::with_transport(transport);
    client.set_base_url(STUB_BASE_URL);
    client
}
