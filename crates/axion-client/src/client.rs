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

//! Client façade grouping the endpoint catalog over one session

use crate::endpoints::{
  fundamentals::{EarningsEndpoints, FilingsEndpoints, FinancialsEndpoints, InsidersEndpoints},
  markets::{CryptoEndpoints, ForexEndpoints, FuturesEndpoints, IndicesEndpoints, StocksEndpoints},
  news::{NewsEndpoints, SentimentEndpoints},
  profiles::ProfilesEndpoints,
  reference::{CreditEndpoints, EconEndpoints, EsgEndpoints, EtfsEndpoints, SupplyChainEndpoints},
};
use crate::session::Session;
use axion_core::{Config, Result};

/// Main Axion API client
///
/// Provides access to all Axion API endpoints through endpoint groups that
/// share one [`Session`].
///
/// # Examples
///
/// ```rust,no_run
/// use axion_client::AxionClient;
/// use axion_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AxionClient::new(Config::from_env()?)?;
///
///     let response = client.stocks().prices("AAPL", Some("2024-01-01"), None, Some("daily")).await;
///     if let Some(message) = response.error_message() {
///         eprintln!("Error: {}", message);
///     } else if let Some(document) = response.document() {
///         println!("{}", document);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AxionClient {
  session: Session,
}

impl AxionClient {
  /// Create a new Axion API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { session: Session::from_config(&config)? })
  }

  /// Create a client from an optional API key with default settings
  pub fn open(api_key: Option<&str>) -> Result<Self> {
    Ok(Self { session: Session::open(api_key)? })
  }

  /// Create a client over an existing session
  pub fn from_session(session: Session) -> Self {
    Self { session }
  }

  /// The underlying session, for raw `execute` calls
  pub fn session(&self) -> &Session {
    &self.session
  }

  /// Release the session
  pub fn close(self) {
    self.session.close();
  }

  /// Stock market endpoints
  pub fn stocks(&self) -> StocksEndpoints {
    StocksEndpoints::new(self.session.clone())
  }

  /// Cryptocurrency endpoints
  pub fn crypto(&self) -> CryptoEndpoints {
    CryptoEndpoints::new(self.session.clone())
  }

  /// Foreign exchange endpoints
  pub fn forex(&self) -> ForexEndpoints {
    ForexEndpoints::new(self.session.clone())
  }

  /// Futures endpoints
  pub fn futures(&self) -> FuturesEndpoints {
    FuturesEndpoints::new(self.session.clone())
  }

  /// Market index endpoints
  pub fn indices(&self) -> IndicesEndpoints {
    IndicesEndpoints::new(self.session.clone())
  }

  /// Economic data endpoints
  pub fn econ(&self) -> EconEndpoints {
    EconEndpoints::new(self.session.clone())
  }

  /// News endpoints
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.session.clone())
  }

  /// Sentiment endpoints
  pub fn sentiment(&self) -> SentimentEndpoints {
    SentimentEndpoints::new(self.session.clone())
  }

  /// Company profile endpoints
  pub fn profiles(&self) -> ProfilesEndpoints {
    ProfilesEndpoints::new(self.session.clone())
  }

  /// Earnings endpoints
  pub fn earnings(&self) -> EarningsEndpoints {
    EarningsEndpoints::new(self.session.clone())
  }

  /// Regulatory filing endpoints
  pub fn filings(&self) -> FilingsEndpoints {
    FilingsEndpoints::new(self.session.clone())
  }

  /// Insider activity endpoints
  pub fn insiders(&self) -> InsidersEndpoints {
    InsidersEndpoints::new(self.session.clone())
  }

  /// Financial statement series
  pub fn financials(&self) -> FinancialsEndpoints {
    FinancialsEndpoints::new(self.session.clone())
  }

  /// Credit rating endpoints
  pub fn credit(&self) -> CreditEndpoints {
    CreditEndpoints::new(self.session.clone())
  }

  /// ESG endpoints
  pub fn esg(&self) -> EsgEndpoints {
    EsgEndpoints::new(self.session.clone())
  }

  /// ETF endpoints
  pub fn etfs(&self) -> EtfsEndpoints {
    EtfsEndpoints::new(self.session.clone())
  }

  /// Supply chain endpoints
  pub fn supply_chain(&self) -> SupplyChainEndpoints {
    SupplyChainEndpoints::new(self.session.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::testing::{recording_session, BASE};

  #[test]
  fn test_client_creation() {
    let client = AxionClient::new(Config::default_with_key("test_key".to_string()))
      .expect("Failed to create client");
    assert!(client.session().is_authenticated());
    client.close();
  }

  #[test]
  fn test_anonymous_client_creation() {
    let client = AxionClient::open(None).expect("Failed to create client");
    assert!(!client.session().is_authenticated());
  }

  #[tokio::test]
  async fn test_endpoint_groups_share_session() {
    let (session, transport) = recording_session();
    let client = AxionClient::from_session(session);

    client.sentiment().social("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/sentiment/AAPL/social"));

    client.profiles().summary("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/AAPL/summary"));

    client.supply_chain().peers("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/supply-chain/AAPL/peers"));
  }

  #[tokio::test]
  async fn test_raw_execute_through_session() {
    let (session, transport) = recording_session();
    let client = AxionClient::from_session(session);

    let response = client.session().execute("stocks/tickers", Some("country=US")).await;
    assert!(response.is_success());
    assert_eq!(transport.last_url(), format!("{BASE}/stocks/tickers?country=US"));
  }
}
