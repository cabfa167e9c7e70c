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

//! News and sentiment endpoints

use super::endpoints;

endpoints! {
  /// Market news endpoints
  pub struct NewsEndpoints;

  /// General market news
  fn general() => "news";

  /// News for one company
  fn company(ticker) => "news/{}";

  /// News for a country
  fn country(country) => "news/country/{}";

  /// News for a category such as `technology`
  fn category(category) => "news/category/{}";
}

endpoints! {
  /// Sentiment endpoints
  ///
  /// Scores are aggregated per ticker from social media, news coverage and
  /// analyst ratings.
  pub struct SentimentEndpoints;

  /// Combined sentiment across all sources
  fn all(ticker) => "sentiment/{}/all";

  /// Social media sentiment
  fn social(ticker) => "sentiment/{}/social";

  /// News sentiment
  fn news(ticker) => "sentiment/{}/news";

  /// Analyst sentiment
  fn analyst(ticker) => "sentiment/{}/analyst";
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::testing::{recording_session, BASE};

  #[tokio::test]
  async fn test_news_paths() {
    let (session, transport) = recording_session();
    let news = NewsEndpoints::new(session);

    news.general().await;
    assert_eq!(transport.last_url(), format!("{BASE}/news"));

    news.company("AAPL").await;
    assert_eq!(transport.last_url(), format!("{BASE}/news/AAPL"));

    news.country("US").await;
    assert_eq!(transport.last_url(), format!("{BASE}/news/country/US"));

    news.category("technology").await;
    assert_eq!(transport.last_url(), format!("{BASE}/news/category/technology"));
  }

  #[tokio::test]
  async fn test_sentiment_paths() {
    let (session, transport) = recording_session();
    let sentiment = SentimentEndpoints::new(session);

    sentiment.all("TSLA").await;
    assert_eq!(transport.last_url(), format!("{BASE}/sentiment/TSLA/all"));

    sentiment.analyst("TSLA").await;
    assert_eq!(transport.last_url(), format!("{BASE}/sentiment/TSLA/analyst"));
  }
}
