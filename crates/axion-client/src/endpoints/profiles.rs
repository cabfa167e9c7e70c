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

//! Company profile endpoints

use super::endpoints;

endpoints! {
  /// Company profile endpoints
  ///
  /// All profile resources live under `profiles/{ticker}/`.
  pub struct ProfilesEndpoints;

  /// Asset profile (sector, industry, officers)
  fn asset(ticker) => "profiles/{}/asset";

  /// Analyst recommendation trend
  fn recommendation(ticker) => "profiles/{}/recommendation";

  /// Cash flow statement history
  fn cashflow(ticker) => "profiles/{}/cashflow";

  /// Index trend estimates
  fn index_trend(ticker) => "profiles/{}/trend/index";

  /// Key statistics
  fn statistics(ticker) => "profiles/{}/statistics";

  /// Income statement history
  fn income(ticker) => "profiles/{}/income";

  /// Fund ownership
  fn fund(ticker) => "profiles/{}/fund";

  /// Summary detail
  fn summary(ticker) => "profiles/{}/summary";

  /// Insider holders
  fn insiders(ticker) => "profiles/{}/insiders";

  /// Calendar events (earnings dates, dividends)
  fn calendar(ticker) => "profiles/{}/calendar";

  /// Balance sheet history
  fn balancesheet(ticker) => "profiles/{}/balancesheet";

  /// Earnings trend estimates
  fn earnings_trend(ticker) => "profiles/{}/trend/earnings";

  /// Institutional ownership
  fn institution_ownership(ticker) => "profiles/{}/institution";

  /// Major holders breakdown
  fn ownership(ticker) => "profiles/{}/ownership";

  /// Earnings history
  fn earnings(ticker) => "profiles/{}/earnings";

  /// General company information
  fn info(ticker) => "profiles/{}/info";

  /// Net insider purchase activity
  fn activity(ticker) => "profiles/{}/activity";

  /// Insider transactions
  fn transactions(ticker) => "profiles/{}/transactions";

  /// Financial data summary
  fn financials(ticker) => "profiles/{}/financials";

  /// Web traffic metrics
  fn traffic(ticker) => "profiles/{}/traffic";
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::testing::{recording_session, BASE};

  #[tokio::test]
  async fn test_trend_paths_are_nested() {
    let (session, transport) = recording_session();
    let profiles = ProfilesEndpoints::new(session);

    profiles.earnings_trend("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/AAPL/trend/earnings"));

    profiles.index_trend("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/AAPL/trend/index"));
  }

  #[tokio::test]
  async fn test_institution_ownership_path() {
    let (session, transport) = recording_session();
    ProfilesEndpoints::new(session).institution_ownership("MSFT").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/MSFT/institution"));
  }

  #[tokio::test]
  async fn test_flat_profile_paths() {
    let (session, transport) = recording_session();
    let profiles = ProfilesEndpoints::new(session);

    profiles.balancesheet("NVDA").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/NVDA/balancesheet"));

    profiles.traffic("NVDA").await;
    assert_eq!(transport.last_url(), format!("{BASE}/profiles/NVDA/traffic"));
  }
}
