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

//! Normalized outcome of one API request

use axion_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The outcome of one request.
///
/// Exactly one shape holds. A response never carries both a document and an
/// error message, and raw response bytes are never retained.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
  /// No HTTP exchange completed.
  Transport {
    /// The transport's own description of the failure
    message: String,
  },

  /// The API answered with status >= 400.
  Http {
    /// HTTP status code
    status: u16,
    /// The body's `message` field, or a fixed fallback
    message: String,
  },

  /// The API answered with status < 400 but the body was not JSON.
  Malformed {
    /// HTTP status code
    status: u16,
    /// Always [`axion_core::MALFORMED_JSON`]
    message: String,
  },

  /// The API answered with status < 400. `document` is `None` for an empty body.
  Success {
    /// HTTP status code
    status: u16,
    /// Parsed JSON document
    document: Option<Value>,
  },
}

impl ApiResponse {
  /// HTTP status, if an exchange completed
  pub fn status(&self) -> Option<u16> {
    match self {
      ApiResponse::Transport { .. } => None,
      ApiResponse::Http { status, .. }
      | ApiResponse::Malformed { status, .. }
      | ApiResponse::Success { status, .. } => Some(*status),
    }
  }

  /// Transport or application failure message, if any
  pub fn error_message(&self) -> Option<&str> {
    match self {
      ApiResponse::Transport { message }
      | ApiResponse::Http { message, .. }
      | ApiResponse::Malformed { message, .. } => Some(message.as_str()),
      ApiResponse::Success { .. } => None,
    }
  }

  /// Parsed document, if the request succeeded with a non-empty body
  pub fn document(&self) -> Option<&Value> {
    match self {
      ApiResponse::Success { document, .. } => document.as_ref(),
      _ => None,
    }
  }

  /// True when there is no error message. The document may still be absent.
  pub fn is_success(&self) -> bool {
    matches!(self, ApiResponse::Success { .. })
  }

  /// True when no HTTP exchange completed
  pub fn is_transport_error(&self) -> bool {
    matches!(self, ApiResponse::Transport { .. })
  }

  /// Consume the response and return the document, if any
  pub fn into_document(self) -> Option<Value> {
    match self {
      ApiResponse::Success { document, .. } => document,
      _ => None,
    }
  }

  /// Convert into a `Result`, mapping each failure shape onto [`Error`].
  pub fn into_result(self) -> Result<Option<Value>> {
    match self {
      ApiResponse::Transport { message } => Err(Error::Transport(message)),
      ApiResponse::Http { status, message } => Err(Error::Http { status, message }),
      ApiResponse::Malformed { status, message } => Err(Error::Parse { status, message }),
      ApiResponse::Success { document, .. } => Ok(document),
    }
  }

  /// Decode the document into a typed value.
  ///
  /// An empty success body is reported as [`Error::EmptyResponse`].
  pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
    let status = self.status().unwrap_or_default();
    match self.into_result()? {
      Some(document) => Ok(serde_json::from_value(document)?),
      None => Err(Error::EmptyResponse { status }),
    }
  }
}
