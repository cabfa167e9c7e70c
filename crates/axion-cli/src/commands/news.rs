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
use clap::{ArgGroup, Args};

/// With no filter the general market feed is returned.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("filter").args(["ticker", "country", "category"]).multiple(false)))]
pub struct NewsArgs {
  /// News for one company
  #[arg(long)]
  pub ticker: Option<String>,

  /// News for a country
  #[arg(long)]
  pub country: Option<String>,

  /// News for a category such as technology
  #[arg(long)]
  pub category: Option<String>,
}

pub async fn execute(client: &AxionClient, args: NewsArgs) -> ApiResponse {
  let news = client.news();
  match (args.ticker, args.country, args.category) {
    (Some(ticker), _, _) => news.company(&ticker).await,
    (_, Some(country), _) => news.country(&country).await,
    (_, _, Some(category)) => news.category(&category).await,
    (None, None, None) => news.general().await,
  }
}
