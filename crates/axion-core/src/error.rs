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

use thiserror::Error;

/// The main error type for axion-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// The transport handle could not be created; no request was attempted
  #[error("Initialization error: {0}")]
  Init(String),

  /// No HTTP exchange completed (DNS, connect, TLS, timeout, body read)
  #[error("Transport error: {0}")]
  Transport(String),

  /// The API answered with status >= 400
  #[error("HTTP {status}: {message}")]
  Http { status: u16, message: String },

  /// The API answered with a success status but the body was not JSON
  #[error("Parse error (HTTP {status}): {message}")]
  Parse { status: u16, message: String },

  /// A document was required but the response body was empty
  #[error("Empty response body (HTTP {status})")]
  EmptyResponse { status: u16 },

  /// The document could not be decoded into the requested type
  #[error("Decode error: {0}")]
  Decode(#[from] serde_json::Error),
}

impl Error {
  /// HTTP status attached to the error, if an exchange completed.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Http { status, .. } | Error::Parse { status, .. } | Error::EmptyResponse { status } => {
        Some(*status)
      }
      _ => None,
    }
  }
}

/// Result type alias for axion-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_error_display() {
    let err = Error::Http { status: 404, message: "ticker not found".to_string() };
    assert_eq!(err.to_string(), "HTTP 404: ticker not found");
    assert_eq!(err.status(), Some(404));
  }

  #[test]
  fn test_transport_error_has_no_status() {
    let err = Error::Transport("connection refused".to_string());
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("connection refused"));
  }

  #[test]
  fn test_decode_error_from_serde() {
    let serde_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
    let err: Error = serde_err.into();
    assert!(matches!(err, Error::Decode(_)));
  }
}
