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

pub mod market;
pub mod news;
pub mod raw;

use anyhow::Result;
use axion_client::ApiResponse;
use tracing::info;

/// Print the document of a successful call to stdout.
///
/// Failures are returned as errors so the process exits non-zero with the
/// normalized message.
pub fn report(response: ApiResponse, compact: bool) -> Result<()> {
  let status = response.status();
  match response.into_result()? {
    Some(document) => {
      let text = if compact {
        serde_json::to_string(&document)?
      } else {
        serde_json::to_string_pretty(&document)?
      };
      println!("{}", text);
    }
    None => info!("Empty response (HTTP {})", status.unwrap_or_default()),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_report_success() {
    let response = ApiResponse::Success { status: 200, document: Some(json!({"symbol": "AAPL"})) };
    assert!(report(response, true).is_ok());
  }

  #[test]
  fn test_report_empty_success() {
    let response = ApiResponse::Success { status: 204, document: None };
    assert!(report(response, false).is_ok());
  }

  #[test]
  fn test_report_http_failure() {
    let response = ApiResponse::Http { status: 404, message: "Ticker not found".to_string() };
    let err = report(response, false).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404: Ticker not found");
  }

  #[test]
  fn test_report_transport_failure() {
    let response = ApiResponse::Transport { message: "Request timed out".to_string() };
    let err = report(response, false).unwrap_err();
    assert!(err.to_string().contains("Request timed out"));
  }
}
