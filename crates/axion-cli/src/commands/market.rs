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

use axion_client::{ApiResponse, AxionClient};
use clap::{Args, ValueEnum};
use tracing::warn;

/// Asset classes with ticker, quote and price endpoints
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetClass {
  Stocks,
  Crypto,
  Forex,
  Futures,
  Indices,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
  /// Asset class
  #[arg(value_enum)]
  pub asset: AssetClass,

  /// Ticker symbol, e.g. AAPL or BTC-USD
  pub ticker: String,
}

#[derive(Args, Debug)]
pub struct PricesArgs {
  /// Asset class
  #[arg(value_enum)]
  pub asset: AssetClass,

  /// Ticker symbol
  pub ticker: String,

  /// Start date (YYYY-MM-DD)
  #[arg(long)]
  pub from: Option<String>,

  /// End date (YYYY-MM-DD)
  #[arg(long)]
  pub to: Option<String>,

  /// Bar size such as daily or weekly
  #[arg(long)]
  pub frame: Option<String>,
}

#[derive(Args, Debug)]
pub struct TickersArgs {
  /// Asset class
  #[arg(value_enum)]
  pub asset: AssetClass,

  /// Filter by country (stocks, forex)
  #[arg(long)]
  pub country: Option<String>,

  /// Filter by exchange (all but crypto)
  #[arg(long)]
  pub exchange: Option<String>,

  /// Filter by asset type (crypto)
  #[arg(long = "type")]
  pub kind: Option<String>,
}

pub async fn quote(client: &AxionClient, args: QuoteArgs) -> ApiResponse {
  let ticker = args.ticker.as_str();
  match args.asset {
    AssetClass::Stocks => client.stocks().quote(ticker).await,
    AssetClass::Crypto => client.crypto().quote(ticker).await,
    AssetClass::Forex => client.forex().quote(ticker).await,
    AssetClass::Futures => client.futures().quote(ticker).await,
    AssetClass::Indices => client.indices().quote(ticker).await,
  }
}

pub async fn prices(client: &AxionClient, args: PricesArgs) -> ApiResponse {
  let ticker = args.ticker.as_str();
  let (from, to, frame) = (args.from.as_deref(), args.to.as_deref(), args.frame.as_deref());
  match args.asset {
    AssetClass::Stocks => client.stocks().prices(ticker, from, to, frame).await,
    AssetClass::Crypto => client.crypto().prices(ticker, from, to, frame).await,
    AssetClass::Forex => client.forex().prices(ticker, from, to, frame).await,
    AssetClass::Futures => client.futures().prices(ticker, from, to, frame).await,
    AssetClass::Indices => client.indices().prices(ticker, from, to, frame).await,
  }
}

pub async fn tickers(client: &AxionClient, args: TickersArgs) -> ApiResponse {
  for filter in ignored_filters(&args) {
    warn!("--{} is not supported for {:?} and will be ignored", filter, args.asset);
  }

  let country = args.country.as_deref();
  let exchange = args.exchange.as_deref();
  match args.asset {
    AssetClass::Stocks => client.stocks().tickers(country, exchange).await,
    AssetClass::Crypto => client.crypto().tickers(args.kind.as_deref()).await,
    AssetClass::Forex => client.forex().tickers(country, exchange).await,
    AssetClass::Futures => client.futures().tickers(exchange).await,
    AssetClass::Indices => client.indices().tickers(exchange).await,
  }
}

/// Filters given on the command line that the asset class has no parameter for
fn ignored_filters(args: &TickersArgs) -> Vec<&'static str> {
  let (country, exchange, kind) = match args.asset {
    AssetClass::Stocks | AssetClass::Forex => (true, true, false),
    AssetClass::Crypto => (false, false, true),
    AssetClass::Futures | AssetClass::Indices => (false, true, false),
  };

  let mut ignored = Vec::new();
  if !country && args.country.is_some() {
    ignored.push("country");
  }
  if !exchange && args.exchange.is_some() {
    ignored.push("exchange");
  }
  if !kind && args.kind.is_some() {
    ignored.push("type");
  }
  ignored
}
