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

//! Fundamentals endpoints: earnings, regulatory filings, insider activity and
//! financial statement series
//!
//! Counting parameters (`limit`, `periods`, `year`, `quarter`) are `u32`;
//! zero is treated the same as `None` and left out of the query.

use super::endpoints;

endpoints! {
  /// Earnings endpoints
  pub struct EarningsEndpoints;

  /// Reported earnings history
  fn history(ticker) => "earnings/{}/history";

  /// Earnings estimate trend
  fn trend(ticker) => "earnings/{}/trend";

  /// Earnings index
  fn index(ticker) => "earnings/{}/index";

  /// Earnings report for one fiscal quarter
  fn report(ticker) => "earnings/{}/report",
    required { "year" => year: u32, "quarter" => quarter: u32 };
}

endpoints! {
  /// Regulatory filing endpoints
  pub struct FilingsEndpoints;

  /// Most recent filings for a company
  fn recent(ticker) => "filings/{}/recent",
    optional { "limit" => limit: u32, "form" => form: &str };

  /// Filings of one form type, e.g. `10-K`
  fn forms(ticker, form) => "filings/{}/forms/{}",
    optional { "year" => year: u32, "quarter" => quarter: u32, "limit" => limit: u32 };

  /// Descriptions of the supported form types
  fn desc_forms() => "filings/desc-forms";

  /// Search filings across companies
  fn search() => "filings/search",
    optional {
      "year" => year: u32,
      "quarter" => quarter: u32,
      "form" => form: &str,
      "ticker" => ticker: &str,
      "limit" => limit: u32,
    };
}

endpoints! {
  /// Insider and ownership activity endpoints
  pub struct InsidersEndpoints;

  /// Funds holding the company
  fn funds(ticker) => "insiders/{}/funds";

  /// Individual insiders
  fn individuals(ticker) => "insiders/{}/individuals";

  /// Institutional holders
  fn institutions(ticker) => "insiders/{}/institutions";

  /// Ownership breakdown
  fn ownership(ticker) => "insiders/{}/ownership";

  /// Net purchase activity
  fn activity(ticker) => "insiders/{}/activity";

  /// Insider transactions
  fn transactions(ticker) => "insiders/{}/transactions";
}

endpoints! {
  /// Financial statement series
  ///
  /// Each series accepts `periods`, the number of most recent reporting
  /// periods to return.
  pub struct FinancialsEndpoints;

  /// Revenue
  fn revenue(ticker) => "financials/{}/revenue",
    optional { "periods" => periods: u32 };

  /// Net income
  fn net_income(ticker) => "financials/{}/net-income",
    optional { "periods" => periods: u32 };

  /// Free cash flow
  fn free_cash_flow(ticker) => "financials/{}/free-cash-flow",
    optional { "periods" => periods: u32 };

  /// Total assets
  fn total_assets(ticker) => "financials/{}/total-assets",
    optional { "periods" => periods: u32 };

  /// Total liabilities
  fn total_liabilities(ticker) => "financials/{}/total-liabilities",
    optional { "periods" => periods: u32 };

  /// Shareholder equity
  fn shareholder_equity(ticker) => "financials/{}/shareholder-equity",
    optional { "periods" => periods: u32 };

  /// Shares outstanding
  fn shares_outstanding(ticker) => "financials/{}/shares-outstanding",
    optional { "periods" => periods: u32 };

  /// Derived metrics (margins, ratios)
  fn metrics(ticker) => "financials/{}/metrics",
    optional { "periods" => periods: u32 };

  /// Latest snapshot of all series
  fn snapshot(ticker) => "financials/{}/snapshot";
}
