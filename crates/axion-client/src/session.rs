/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Transport session and request executor
//!
//! Every endpoint funnels through [`Session::execute`], which builds the URL,
//! attaches auth headers, performs one GET and normalizes the outcome into an
//! [`ApiResponse`]. Failures never escape as `Err`; the caller inspects the
//! response.

use crate::response::ApiResponse;
use crate::transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport};
use axion_core::{Config, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Long-lived holder of the transport handle and the optional credential.
///
/// Cloning shares the same handle. The production transport pools
/// connections and is safe to use from concurrent tasks.
#[derive(Clone)]
pub struct Session {
  transport: Arc<dyn HttpTransport>,
  api_key: Option<String>,
  base_url: String,
}

impl Session {
  /// Open a session with the default transport.
  ///
  /// # Errors
  ///
  /// Returns [`axion_core::Error::Init`] if the HTTP client cannot be created.
  pub fn open(api_key: Option<&str>) -> Result<Self> {
    let config = Config { api_key: api_key.map(str::to_string), ..Config::default() };
    Self::from_config(&config)
  }

  /// Open a session from a [`Config`].
  pub fn from_config(config: &Config) -> Result<Self> {
    let transport = ReqwestTransport::new(config)?;
    Ok(Self::with_transport(config.api_key.as_deref(), Arc::new(transport)))
  }

  /// Open a session over a caller-supplied transport.
  pub fn with_transport(api_key: Option<&str>, transport: Arc<dyn HttpTransport>) -> Self {
    Self {
      transport,
      api_key: api_key.map(str::to_string),
      base_url: axion_core::BASE_URL.to_string(),
    }
  }

  /// Point the session at another host. Only the crate's own tests do this.
  #[cfg(test)]
  pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  /// Release the transport handle and the credential.
  pub fn close(self) {
    drop(self);
  }

  /// Whether requests carry a bearer credential
  pub fn is_authenticated(&self) -> bool {
    self.api_key.is_some()
  }

  /// Execute a GET against `path` with an optional pre-encoded query string.
  #[instrument(skip(self), fields(authenticated = self.api_key.is_some()))]
  pub async fn execute(&self, path: &str, query: Option<&str>) -> ApiResponse {
    self.execute_inner(path, query, None).await
  }

  /// Same as [`Session::execute`] with a per-call deadline.
  #[instrument(skip(self), fields(authenticated = self.api_key.is_some()))]
  pub async fn execute_with_timeout(
    &self,
    path: &str,
    query: Option<&str>,
    timeout: Duration,
  ) -> ApiResponse {
    self.execute_inner(path, query, Some(timeout)).await
  }

  async fn execute_inner(
    &self,
    path: &str,
    query: Option<&str>,
    timeout: Option<Duration>,
  ) -> ApiResponse {
    let request = self.build_request(path, query).with_timeout(timeout);
    debug!("GET {}", request.url);

    match self.transport.perform(request).await {
      Ok(raw) => classify(raw),
      Err(e) => {
        error!("Transport failure: {}", e);
        ApiResponse::Transport { message: e.message().to_string() }
      }
    }
  }

  /// Build the URL and headers for one call.
  pub(crate) fn build_request(&self, path: &str, query: Option<&str>) -> HttpRequest {
    let path = path.strip_prefix('/').unwrap_or(path);
    let url = match query {
      Some(query) if !query.is_empty() => format!("{}/{}?{}", self.base_url, path, query),
      _ => format!("{}/{}", self.base_url, path),
    };

    let request = HttpRequest::get(url);
    match &self.api_key {
      Some(key) => request
        .with_header("Authorization", format!("Bearer {}", key))
        .with_header("Content-Type", "application/json"),
      None => request,
    }
  }
}

impl fmt::Debug for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("transport", &self.transport)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("base_url", &self.base_url)
      .finish()
  }
}

/// Turn a completed exchange into an [`ApiResponse`]. The body is consumed.
fn classify(raw: RawResponse) -> ApiResponse {
  let RawResponse { status, body } = raw;

  if status >= 400 {
    let message = error_message(&body);
    warn!("HTTP {}: {}", status, message);
    return ApiResponse::Http { status, message };
  }

  if body.trim_ascii().is_empty() {
    debug!("HTTP {} with empty body", status);
    return ApiResponse::Success { status, document: None };
  }

  match serde_json::from_slice::<Value>(&body) {
    Ok(document) => ApiResponse::Success { status, document: Some(document) },
    Err(e) => {
      error!("Failed to parse JSON response: {}", e);
      ApiResponse::Malformed { status, message: axion_core::MALFORMED_JSON.to_string() }
    }
  }
}

/// Pull a non-empty string `message` out of an error body, or fall back.
fn error_message(body: &[u8]) -> String {
  match serde_json::from_slice::<Value>(body) {
    Ok(json) => json
      .get("message")
      .and_then(Value::as_str)
      .filter(|message| !message.is_empty())
      .unwrap_or(axion_core::UNKNOWN_HTTP_ERROR)
      .to_string(),
    Err(_) => axion_core::UNPARSEABLE_HTTP_ERROR.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::Query;
  use crate::transport::TransportError;
  use async_trait::async_trait;
  use std::sync::Mutex;
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  /// Replays a fixed outcome and records every request it sees.
  #[derive(Debug)]
  struct ScriptedTransport {
    outcome: std::result::Result<RawResponse, TransportError>,
    seen: Mutex<Vec<HttpRequest>>,
  }

  impl ScriptedTransport {
    fn respond(status: u16, body: &str) -> Arc<Self> {
      Arc::new(Self { outcome: Ok(RawResponse::new(status, body)), seen: Mutex::new(Vec::new()) })
    }

    fn fail(message: &str) -> Arc<Self> {
      Arc::new(Self { outcome: Err(TransportError::new(message)), seen: Mutex::new(Vec::new()) })
    }

    fn requests(&self) -> Vec<HttpRequest> {
      self.seen.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl HttpTransport for ScriptedTransport {
    async fn perform(
      &self,
      request: HttpRequest,
    ) -> std::result::Result<RawResponse, TransportError> {
      self.seen.lock().unwrap().push(request);
      self.outcome.clone()
    }
  }

  fn session(transport: Arc<ScriptedTransport>) -> Session {
    Session::with_transport(Some("test_key"), transport)
  }

  #[test]
  fn test_url_without_query() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let request = session.build_request("stocks/AAPL", None);
    assert_eq!(request.url, "https://api.axionquant.com/stocks/AAPL");
  }

  #[test]
  fn test_url_with_encoded_query_has_one_separator() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let query = Query::new().optional("A", Some("1")).optional::<&str>("B", None).optional("C", Some("3"));
    let request = session.build_request("path", query.encode().as_deref());
    assert_eq!(request.url, "https://api.axionquant.com/path?A=1&C=3");
    assert_eq!(request.url.matches('?').count(), 1);
  }

  #[test]
  fn test_empty_query_is_omitted() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let request = session.build_request("news", Some(""));
    assert_eq!(request.url, "https://api.axionquant.com/news");
  }

  #[test]
  fn test_leading_slash_is_tolerated() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let request = session.build_request("/news", None);
    assert_eq!(request.url, "https://api.axionquant.com/news");
  }

  #[test]
  fn test_auth_headers_with_credential() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let request = session.build_request("stocks/AAPL", None);
    assert_eq!(request.header("Authorization"), Some("Bearer test_key"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
  }

  #[test]
  fn test_no_headers_without_credential() {
    let session = Session::with_transport(None, ScriptedTransport::respond(200, "{}"));
    assert!(!session.is_authenticated());
    let request = session.build_request("stocks/AAPL", None);
    assert!(request.headers.is_empty());
  }

  #[test]
  fn test_debug_redacts_credential() {
    let session = session(ScriptedTransport::respond(200, "{}"));
    let rendered = format!("{:?}", session);
    assert!(!rendered.contains("test_key"));
    assert!(rendered.contains("<redacted>"));
  }

  #[tokio::test]
  async fn test_transport_failure() {
    let transport = ScriptedTransport::fail("Couldn't resolve host name");
    let response = session(transport.clone()).execute("stocks/AAPL", Some("frame=daily")).await;

    assert_eq!(response, ApiResponse::Transport { message: "Couldn't resolve host name".to_string() });
    assert_eq!(response.status(), None);
    assert!(response.document().is_none());
    assert_eq!(transport.requests().len(), 1);
  }

  #[tokio::test]
  async fn test_http_error_with_message() {
    let transport = ScriptedTransport::respond(404, r#"{"message":"ticker not found"}"#);
    let response = session(transport).execute("stocks/ZZZZ", None).await;

    assert_eq!(response, ApiResponse::Http { status: 404, message: "ticker not found".to_string() });
    assert!(response.document().is_none());
  }

  #[tokio::test]
  async fn test_http_error_without_message() {
    let response = session(ScriptedTransport::respond(404, "{}")).execute("stocks/ZZZZ", None).await;
    assert_eq!(response.error_message(), Some("An unknown HTTP error occurred."));
    assert_eq!(response.status(), Some(404));
  }

  #[tokio::test]
  async fn test_http_error_with_non_string_message() {
    let response =
      session(ScriptedTransport::respond(500, r#"{"message":42}"#)).execute("stocks/AAPL", None).await;
    assert_eq!(response.error_message(), Some(axion_core::UNKNOWN_HTTP_ERROR));
  }

  #[tokio::test]
  async fn test_http_error_with_empty_message() {
    let response =
      session(ScriptedTransport::respond(400, r#"{"message":""}"#)).execute("stocks/AAPL", None).await;
    assert_eq!(response.error_message(), Some(axion_core::UNKNOWN_HTTP_ERROR));
  }

  #[tokio::test]
  async fn test_http_error_with_unparseable_body() {
    let response =
      session(ScriptedTransport::respond(404, r#"{"message":"tick"#)).execute("stocks/AAPL", None).await;
    assert_eq!(
      response.error_message(),
      Some("An unknown HTTP error occurred (failed to parse error response).")
    );
    assert_eq!(response.status(), Some(404));
  }

  #[tokio::test]
  async fn test_success_document() {
    let response = session(ScriptedTransport::respond(200, r#"{"symbol":"AAPL","price":123.45}"#))
      .execute("stocks/AAPL", None)
      .await;

    assert!(response.is_success());
    assert_eq!(response.status(), Some(200));
    assert!(response.error_message().is_none());
    let document = response.document().unwrap();
    assert_eq!(document["price"].as_f64(), Some(123.45));
    assert_eq!(document["symbol"], "AAPL");
  }

  #[tokio::test]
  async fn test_long_prices_parse_exactly() {
    for price in ["951.01757771948286951", "710.0263163267975"] {
      let body = format!(r#"{{"price":{}}}"#, price);
      let response = session(ScriptedTransport::respond(200, &body)).execute("stocks/AAPL", None).await;

      let expected: f64 = price.parse().unwrap();
      assert_eq!(response.document().unwrap()["price"].as_f64(), Some(expected));
    }
  }

  #[tokio::test]
  async fn test_success_array_document() {
    let response = session(ScriptedTransport::respond(200, r#"[{"ticker":"AAPL"}]"#))
      .execute("stocks/tickers", None)
      .await;
    assert_eq!(response.document().unwrap()[0]["ticker"], "AAPL");
  }

  #[tokio::test]
  async fn test_success_empty_body() {
    let response = session(ScriptedTransport::respond(200, "")).execute("news", None).await;
    assert_eq!(response, ApiResponse::Success { status: 200, document: None });
    assert!(response.error_message().is_none());
  }

  #[tokio::test]
  async fn test_success_whitespace_body_is_empty() {
    let response = session(ScriptedTransport::respond(200, " \r\n")).execute("news", None).await;
    assert_eq!(response, ApiResponse::Success { status: 200, document: None });
  }

  #[tokio::test]
  async fn test_success_malformed_body() {
    let response = session(ScriptedTransport::respond(200, "not json")).execute("news", None).await;
    assert_eq!(
      response,
      ApiResponse::Malformed { status: 200, message: "Failed to parse JSON response.".to_string() }
    );
    assert!(response.document().is_none());
  }

  #[tokio::test]
  async fn test_redirect_range_status_is_success_path() {
    let response = session(ScriptedTransport::respond(304, "")).execute("news", None).await;
    assert_eq!(response, ApiResponse::Success { status: 304, document: None });
  }

  #[tokio::test]
  async fn test_execute_is_idempotent() {
    let transport = ScriptedTransport::respond(200, r#"{"symbol":"AAPL","price":123.45}"#);
    let session = session(transport.clone());
    let first = session.execute("stocks/AAPL", Some("frame=daily")).await;
    let second = session.execute("stocks/AAPL", Some("frame=daily")).await;

    assert_eq!(first, second);
    let requests = transport.requests();
    assert_eq!(requests[0], requests[1]);
  }

  #[tokio::test]
  async fn test_timeout_is_forwarded() {
    let transport = ScriptedTransport::respond(200, "{}");
    let session = session(transport.clone());
    session.execute("news", None).await;
    session.execute_with_timeout("news", None, Duration::from_secs(2)).await;

    let requests = transport.requests();
    assert_eq!(requests[0].timeout, None);
    assert_eq!(requests[1].timeout, Some(Duration::from_secs(2)));
  }

  #[test]
  fn test_open_without_credential() {
    let session = Session::open(None).expect("Failed to open session");
    assert!(!session.is_authenticated());
    session.close();
  }

  #[tokio::test]
  async fn test_end_to_end_over_http() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/stocks/AAPL/prices"))
      .and(query_param("from", "2024-01-01"))
      .and(query_param("frame", "daily"))
      .and(header("authorization", "Bearer test_key"))
      .and(header("content-type", "application/json"))
      .respond_with(
        ResponseTemplate::new(200).set_body_string(r#"{"symbol":"AAPL","prices":[{"close":187.15}]}"#),
      )
      .expect(1)
      .mount(&server)
      .await;

    let session = Session::open(Some("test_key")).unwrap().with_base_url(&server.uri());
    let query = Query::new()
      .optional("from", Some("2024-01-01"))
      .optional::<&str>("to", None)
      .optional("frame", Some("daily"))
      .encode();
    let response = session.execute("stocks/AAPL/prices", query.as_deref()).await;

    assert_eq!(response.status(), Some(200));
    assert_eq!(response.document().unwrap()["prices"][0]["close"].as_f64(), Some(187.15));
  }

  #[tokio::test]
  async fn test_end_to_end_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/stocks/NOPE"))
      .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"ticker not found"}"#))
      .mount(&server)
      .await;

    let session = Session::open(None).unwrap().with_base_url(&server.uri());
    let response = session.execute("stocks/NOPE", None).await;
    assert_eq!(response, ApiResponse::Http { status: 404, message: "ticker not found".to_string() });
  }
}
