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

//! # axion-client
//!
//! A client for the Axion financial data API.
//!
//! ## Features
//!
//! - **One chokepoint**: every endpoint goes through [`Session::execute`]
//! - **Normalized results**: each call yields an [`ApiResponse`] holding a
//!   parsed JSON document or a human-readable failure, never raw bytes
//! - **Async/Await**: built on tokio and reqwest, with pooled connections
//! - **Declarative catalog**: endpoint methods are generated from tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use axion_client::AxionClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AxionClient::open(Some("your-api-key"))?;
//!
//!     let quote = client.stocks().quote("AAPL").await;
//!     match quote.error_message() {
//!         Some(message) => eprintln!("Error: {}", message),
//!         None => println!("{:?}", quote.document()),
//!     }
//!
//!     // Or with `?`, mapping failures onto axion_core::Error
//!     let prices = client.stocks().prices("AAPL", None, None, Some("daily")).await.into_result()?;
//!     println!("{:?}", prices);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failures come back as [`ApiResponse`] variants: `Transport` when no HTTP
//! exchange completed, `Http` for status >= 400, `Malformed` when a success
//! body is not JSON. [`ApiResponse::into_result`] and [`ApiResponse::decode`]
//! convert to `Result<T, axion_core::Error>`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod query;
pub mod response;
pub mod session;
pub mod transport;

pub use axion_core::{Config, Error, Result};
pub use client::AxionClient;
pub use query::{Query, QueryValue};
pub use response::ApiResponse;
pub use session::Session;
pub use transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport, TransportError};

pub use endpoints::{
  fundamentals::{EarningsEndpoints, FilingsEndpoints, FinancialsEndpoints, InsidersEndpoints},
  markets::{CryptoEndpoints, ForexEndpoints, FuturesEndpoints, IndicesEndpoints, StocksEndpoints},
  news::{NewsEndpoints, SentimentEndpoints},
  profiles::ProfilesEndpoints,
  reference::{CreditEndpoints, EconEndpoints, EsgEndpoints, EtfsEndpoints, SupplyChainEndpoints},
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_url_is_fixed() {
    assert_eq!(axion_core::BASE_URL, "https://api.axionquant.com");
  }

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key.as_deref(), Some("test_key"));
    assert!(AxionClient::new(config).is_ok());
  }
}
