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

//! Reference data endpoints: economics, credit, ESG, ETFs and supply chain

use super::endpoints;

endpoints! {
  /// Economic data endpoints
  pub struct EconEndpoints;

  /// Search economic series by free text
  fn search() => "econ/search",
    required { "query" => query: &str };

  /// Observations for one economic series
  fn dataset(series_id) => "econ/dataset/{}";

  /// Economic events calendar
  ///
  /// * `min_importance` - lowest importance level to include; `0` is sent as is
  fn calendar() => "econ/calendar",
    optional {
      "from" => from: &str,
      "to" => to: &str,
      "country" => country: &str,
      "minImportance" => min_importance: u8,
      "currency" => currency: &str,
      "category" => category: &str,
    };
}

endpoints! {
  /// Credit rating endpoints
  pub struct CreditEndpoints;

  /// Search rated entities by name
  fn search() => "credit/search",
    required { "query" => query: &str };

  /// Ratings for one entity
  fn ratings(entity_id) => "credit/ratings/{}";
}

endpoints! {
  /// ESG score endpoints
  pub struct EsgEndpoints;

  /// ESG scores for a company
  fn data(ticker) => "esg/{}";
}

endpoints! {
  /// Exchange-traded fund endpoints
  pub struct EtfsEndpoints;

  /// Fund overview
  fn fund(ticker) => "etfs/{}/fund";

  /// Fund holdings
  fn holdings(ticker) => "etfs/{}/holdings";

  /// Sector and country exposure
  fn exposure(ticker) => "etfs/{}/exposure";
}

endpoints! {
  /// Supply chain relationship endpoints
  pub struct SupplyChainEndpoints;

  /// Known customers
  fn customers(ticker) => "supply-chain/{}/customers";

  /// Industry peers
  fn peers(ticker) => "supply-chain/{}/peers";

  /// Known suppliers
  fn suppliers(ticker) => "supply-chain/{}/suppliers";
}
