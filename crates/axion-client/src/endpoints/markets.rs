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

//! Market data endpoints: stocks, crypto, forex, futures and indices
//!
//! Every asset class exposes the same three shapes: a ticker listing, a
//! single quote and a price history filtered by date range and frame.

use super::endpoints;

endpoints! {
  /// Stock market endpoints
  pub struct StocksEndpoints;

  /// List stock tickers, optionally filtered by country and exchange
  fn tickers() => "stocks/tickers",
    optional { "country" => country: &str, "exchange" => exchange: &str };

  /// Latest quote for a stock
  fn quote(ticker) => "stocks/{}";

  /// Price history for a stock
  ///
  /// * `from` / `to` - dates in `YYYY-MM-DD` format
  /// * `frame` - bar size such as `daily` or `weekly`
  fn prices(ticker) => "stocks/{}/prices",
    optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
}

endpoints! {
  /// Cryptocurrency endpoints
  pub struct CryptoEndpoints;

  /// List crypto tickers, optionally filtered by asset type
  fn tickers() => "crypto/tickers",
    optional { "type" => kind: &str };

  /// Latest quote for a crypto pair
  fn quote(ticker) => "crypto/{}";

  /// Price history for a crypto pair
  fn prices(ticker) => "crypto/{}/prices",
    optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
}

endpoints! {
  /// Foreign exchange endpoints
  pub struct ForexEndpoints;

  /// List forex tickers
  fn tickers() => "forex/tickers",
    optional { "country" => country: &str, "exchange" => exchange: &str };

  /// Latest quote for a currency pair
  fn quote(ticker) => "forex/{}";

  /// Price history for a currency pair
  fn prices(ticker) => "forex/{}/prices",
    optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
}

endpoints! {
  /// Futures endpoints
  pub struct FuturesEndpoints;

  /// List futures tickers
  fn tickers() => "futures/tickers",
    optional { "exchange" => exchange: &str };

  /// Latest quote for a futures contract
  fn quote(ticker) => "futures/{}";

  /// Price history for a futures contract
  fn prices(ticker) => "futures/{}/prices",
    optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
}

endpoints! {
  /// Market index endpoints
  pub struct IndicesEndpoints;

  /// List index tickers
  fn tickers() => "indices/tickers",
    optional { "exchange" => exchange: &str };

  /// Latest level of an index
  fn quote(ticker) => "indices/{}";

  /// Level history for an index
  fn prices(ticker) => "indices/{}/prices",
    optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
}
