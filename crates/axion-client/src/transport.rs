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

//! HTTP transport layer for Axion API requests
//!
//! The transport performs exactly one GET and hands back the status and the
//! full body, or a transport error when no HTTP exchange completed. It never
//! interprets statuses or bodies; that is the executor's job.

use async_trait::async_trait;
use axion_core::{Config, Error, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// A single GET request described as plain data.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
  /// Fully built target URL
  pub url: String,
  /// Headers attached to the request, in order
  pub headers: Vec<(String, String)>,
  /// Per-call deadline overriding the transport default
  pub timeout: Option<Duration>,
}

impl HttpRequest {
  /// Create a GET request for `url` with no headers
  pub fn get(url: impl Into<String>) -> Self {
    Self { url: url.into(), headers: Vec::new(), timeout: None }
  }

  /// Attach a header
  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.push((name.into(), value.into()));
    self
  }

  /// Attach a per-call deadline
  pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
    self.timeout = timeout;
    self
  }

  /// Value of the first header named `name` (case-insensitive)
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

// Header values carry the credential; keep them out of logs.
impl fmt::Debug for HttpRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
    f.debug_struct("HttpRequest")
      .field("url", &self.url)
      .field("headers", &names)
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// Status and complete body of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
  /// Numeric HTTP status
  pub status: u16,
  /// Full response body
  pub body: Vec<u8>,
}

impl RawResponse {
  /// Build a response from a status and body
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self { status, body: body.into() }
  }
}

/// Transport-level failure: no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
  message: String,
}

impl TransportError {
  /// Create an error carrying the transport's own description
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  /// The transport's description of the failure
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for TransportError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

impl std::error::Error for TransportError {}

/// The capability the executor needs: perform one GET, return status + body.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
  /// Perform the request and buffer the whole body.
  async fn perform(&self, request: HttpRequest) -> std::result::Result<RawResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  client: Client,
}

impl ReqwestTransport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let mut builder = Client::builder().user_agent(axion_core::USER_AGENT);
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }

    let client = builder
      .build()
      .map_err(|e| Error::Init(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client })
  }

  /// Wrap an already configured `reqwest::Client`
  pub fn with_client(client: Client) -> Self {
    Self { client }
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  #[instrument(skip(self, request), fields(url = %request.url))]
  async fn perform(&self, request: HttpRequest) -> std::result::Result<RawResponse, TransportError> {
    let mut builder = self.client.get(&request.url);
    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(timeout) = request.timeout {
      builder = builder.timeout(timeout);
    }

    let response = builder.send().await.map_err(|e| {
      if e.is_timeout() {
        TransportError::new(format!("Request timed out: {}", e))
      } else if e.is_connect() {
        TransportError::new(format!("Connection failed: {}", e))
      } else {
        TransportError::new(format!("Request failed: {}", e))
      }
    })?;

    let status = response.status().as_u16();
    let body = response
      .bytes()
      .await
      .map_err(|e| TransportError::new(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} body bytes", status, body.len());
    Ok(RawResponse { status, body: body.to_vec() })
  }
}
