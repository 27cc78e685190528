//! HTTP transport layer for the Shopify client.
//!
//! One outbound request per call. Non-2xx statuses surface as
//! [`ShopifyError::Upstream`] with the raw body; there is no retry and no
//! interpretation of Shopify error codes.

use crate::config::ClientConfig;
use crate::error::{ShopifyError, ShopifyResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Header carrying the static Admin API token.
const ACCESS_TOKEN_HEADER: &str = "x-shopify-access-token";

/// HTTP transport for making Admin API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> ShopifyResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::HeaderName::from_static(ACCESS_TOKEN_HEADER),
            header::HeaderValue::from_str(&config.access_token)
                .map_err(|_| ShopifyError::Config("invalid access token format".to_string()))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given relative path.
    fn build_url(&self, path: &str) -> ShopifyResult<url::Url> {
        self.config.base_url.join(path).map_err(ShopifyError::InvalidUrl)
    }

    /// Send a request and map non-2xx statuses to [`ShopifyError::Upstream`].
    async fn execute(&self, request: RequestBuilder) -> ShopifyResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ShopifyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful response as JSON, falling back to the raw text
    /// when the body does not parse.
    async fn decode(response: Response) -> ShopifyResult<serde_json::Value> {
        let text = response.text().await?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(serde_json::Value::String(text)),
        }
    }

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> ShopifyResult<serde_json::Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        Self::decode(response).await
    }

    /// Execute a GET request with query parameters. Names and values are
    /// URL-encoded by the query serializer.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ShopifyResult<serde_json::Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.execute(self.client.get(url).query(query)).await?;
        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ShopifyResult<serde_json::Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self.execute(self.client.post(url).json(body)).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ShopifyResult<serde_json::Value> {
        let url = self.build_url(path)?;
        debug!(url = %url, "PUT request");

        let response = self.execute(self.client.put(url).json(body)).await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig {
            base_url: url::Url::parse(base_url).unwrap(),
            shop: "test-store.myshopify.com".to_string(),
            access_token: "shpat_test".to_string(),
            timeout: Duration::from_secs(30),
        })
    }

    #[tokio::test]
    async fn get_sends_access_token_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .and(header("x-shopify-access-token", "shpat_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "themes": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        let value = transport.get("themes.json").await.unwrap();
        assert_eq!(value["themes"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn query_parameters_are_url_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/themes/123/assets.json"))
            .and(query_param("asset[key]", "templates/index.liquid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "templates/index.liquid", "value": "<html/>"}
            })))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        let value = transport
            .get_with_query("themes/123/assets.json", &[("asset[key]", "templates/index.liquid")])
            .await
            .unwrap();
        assert_eq!(value["asset"]["key"], "templates/index.liquid");
    }

    #[tokio::test]
    async fn put_sends_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/themes/123/assets.json"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asset": {"key": "snippets/greeting.liquid"}
            })))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        let body = serde_json::json!({"asset": {"key": "snippets/greeting.liquid", "value": "hi"}});
        let value = transport.put("themes/123/assets.json", &body).await.unwrap();
        assert_eq!(value["asset"]["key"], "snippets/greeting.liquid");
    }

    #[tokio::test]
    async fn upstream_error_carries_status_and_body_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        let err = transport.get("themes.json").await.unwrap_err();
        match err {
            ShopifyError::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected Upstream error, got {other:?}"),
        }
        // Mock expectation of exactly one request verifies no retry happened.
    }

    #[tokio::test]
    async fn non_json_success_falls_back_to_raw_text() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/themes.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain text, not json"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();
        let value = transport.get("themes.json").await.unwrap();
        assert_eq!(value, serde_json::Value::String("plain text, not json".to_string()));
    }
}
