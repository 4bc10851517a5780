use crate::core::currency::Currency;
use crate::core::error::FetchError;
use crate::core::quote::{ExchangeQuote, QuoteProvider};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Client for the currencylayer `live` endpoint.
///
/// Every call issues exactly one request. Nothing is cached or retried.
pub struct CurrencyLayerProvider {
    base_url: String,
    api_key: String,
}

impl CurrencyLayerProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        CurrencyLayerProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn currencies() -> String {
        Currency::ALL
            .iter()
            .map(Currency::code)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn live_url(&self) -> Result<Url, FetchError> {
        let endpoint = format!("{}/live", self.base_url);
        let mut url = Url::parse(&endpoint).map_err(|e| FetchError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("access_key", &self.api_key)
            .append_pair("currencies", &Self::currencies());
        Ok(url)
    }
}

// currencylayer answers failed calls with HTTP 200 and this body
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    info: Option<String>,
}

#[async_trait]
impl QuoteProvider for CurrencyLayerProvider {
    #[instrument(name = "CurrencyLayerFetch", skip(self))]
    async fn fetch_quotes(&self) -> Result<ExchangeQuote, FetchError> {
        let url = self.live_url()?;
        debug!(
            "Requesting live quotes from {}/live for {}",
            self.base_url,
            Self::currencies()
        );

        let client = reqwest::Client::builder()
            .user_agent("xrate/1.0")
            .build()
            .map_err(FetchError::Network)?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        debug!(status = %response.status(), "Received currencylayer response");

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await.map_err(FetchError::Network)?;

        serde_json::from_str::<ExchangeQuote>(&text).map_err(|e| {
            if let Ok(api) = serde_json::from_str::<ApiErrorResponse>(&text) {
                warn!(
                    code = api.error.code,
                    info = api.error.info.as_deref().unwrap_or("unknown"),
                    "currencylayer rejected the request"
                );
            }
            FetchError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LIVE_RESPONSE: &str = r#"{
        "success": true,
        "terms": "https://currencylayer.com/terms",
        "privacy": "https://currencylayer.com/privacy",
        "timestamp": 1700000000,
        "source": "USD",
        "quotes": {
            "USDKRW": 1318.456,
            "USDJPY": 147.123,
            "USDPHP": 56.789
        }
    }"#;

    async fn create_mock_server(status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/live"))
            .and(query_param("access_key", "test-key"))
            .and(query_param("currencies", "KRW,JPY,PHP"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_quote_fetch() {
        let mock_server = create_mock_server(200, LIVE_RESPONSE).await;
        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");

        let quote = provider.fetch_quotes().await.expect("Failed to fetch quotes");
        assert_eq!(quote.timestamp, 1700000000);
        assert_eq!(quote.rate(Currency::KRW), 1318.456);
        assert_eq!(quote.rate(Currency::JPY), 147.123);
        assert_eq!(quote.rate(Currency::PHP), 56.789);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = create_mock_server(200, LIVE_RESPONSE).await;
        let base_url = format!("{}/", mock_server.uri());
        let provider = CurrencyLayerProvider::new(&base_url, "test-key");

        assert!(provider.fetch_quotes().await.is_ok());
    }

    #[tokio::test]
    async fn test_each_missing_rate_is_a_decode_error() {
        for missing in Currency::ALL {
            let quotes = Currency::ALL
                .iter()
                .filter(|c| **c != missing)
                .map(|c| format!(r#""{}": 1.5"#, c.pair_key()))
                .collect::<Vec<_>>()
                .join(",");
            let body = format!(r#"{{"timestamp": 1700000000, "quotes": {{{quotes}}}}}"#);

            let mock_server = create_mock_server(200, &body).await;
            let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");

            let err = provider.fetch_quotes().await.unwrap_err();
            assert!(err.is_decode(), "missing {missing}: {err}");
        }
    }

    #[tokio::test]
    async fn test_api_error_body_is_a_decode_error() {
        let body = r#"{
            "success": false,
            "error": {"code": 101, "info": "You have not supplied a valid API Access Key."}
        }"#;
        let mock_server = create_mock_server(200, body).await;
        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");

        let err = provider.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_decode_error() {
        let mock_server = create_mock_server(200, "<html>oops</html>").await;
        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");

        let err = provider.fetch_quotes().await.unwrap_err();
        assert!(err.is_decode());
        assert!(
            err.to_string()
                .starts_with("Failed to decode quote response")
        );
    }

    #[tokio::test]
    async fn test_server_error_response() {
        let mock_server = create_mock_server(500, "").await;
        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");

        let err = provider.fetch_quotes().await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.to_string(), "HTTP error: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let provider = CurrencyLayerProvider::new("http://127.0.0.1:1", "test-key");

        let err = provider.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let provider = CurrencyLayerProvider::new("not a url", "test-key");

        let err = provider.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_api_key_is_url_encoded() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .and(query_param("access_key", "a&b=c"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LIVE_RESPONSE))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "a&b=c");
        assert!(provider.fetch_quotes().await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_independent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LIVE_RESPONSE))
            .expect(2)
            .mount(&mock_server)
            .await;

        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");
        let (first, second) = tokio::join!(provider.fetch_quotes(), provider.fetch_quotes());
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/live"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = CurrencyLayerProvider::new(&mock_server.uri(), "test-key");
        assert!(provider.fetch_quotes().await.is_err());
    }
}
