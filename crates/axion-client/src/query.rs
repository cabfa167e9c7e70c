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

//! Query string encoding for endpoint parameters
//!
//! Parameters are kept in insertion order. Absent values are skipped, and a
//! query with no present values encodes to `None` so callers never emit a bare
//! `?`. Keys and values are percent-encoded; plain ASCII names, tickers and
//! dates come through unchanged.

use std::borrow::Cow;
use url::form_urlencoded::byte_serialize;

/// A value that can appear in a query string.
pub trait QueryValue {
  /// Render the value, or `None` if it should be treated as absent.
  fn render(&self) -> Option<String>;
}

impl QueryValue for &str {
  fn render(&self) -> Option<String> {
    Some((*self).to_string())
  }
}

impl QueryValue for String {
  fn render(&self) -> Option<String> {
    Some(self.clone())
  }
}

/// Counts such as `limit`, `periods`, `year` and `quarter`: zero means unset.
impl QueryValue for u32 {
  fn render(&self) -> Option<String> {
    (*self > 0).then(|| self.to_string())
  }
}

/// Levels such as `minImportance`: zero is a valid value.
impl QueryValue for u8 {
  fn render(&self) -> Option<String> {
    Some(self.to_string())
  }
}

/// Ordered list of `(key, optional value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  pairs: Vec<(Cow<'static, str>, Option<String>)>,
}

impl Query {
  /// Create an empty query
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a parameter that is always supplied by the caller.
  pub fn require<V: QueryValue>(mut self, key: impl Into<Cow<'static, str>>, value: V) -> Self {
    self.pairs.push((key.into(), value.render()));
    self
  }

  /// Append a parameter that may be absent.
  pub fn optional<V: QueryValue>(
    mut self,
    key: impl Into<Cow<'static, str>>,
    value: Option<V>,
  ) -> Self {
    self.pairs.push((key.into(), value.and_then(|v| v.render())));
    self
  }

  /// Number of pairs that carry a value.
  pub fn present_len(&self) -> usize {
    self.pairs.iter().filter(|(_, value)| value.is_some()).count()
  }

  /// Encode as `k=v&k=v`, or `None` when no pair carries a value.
  pub fn encode(&self) -> Option<String> {
    let encoded: Vec<String> = self
      .pairs
      .iter()
      .filter_map(|(key, value)| {
        value.as_ref().map(|v| format!("{}={}", encode_component(key), encode_component(v)))
      })
      .collect();

    if encoded.is_empty() {
      None
    } else {
      Some(encoded.join("&"))
    }
  }
}

fn encode_component(raw: &str) -> String {
  byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_no_pairs_is_no_query() {
    assert_eq!(Query::new().encode(), None);
  }

  #[test]
  fn test_all_absent_is_no_query() {
    let query = Query::new().optional::<&str>("from", None).optional::<&str>("to", None);
    assert_eq!(query.present_len(), 0);
    assert_eq!(query.encode(), None);
  }

  #[test]
  fn test_absent_values_skipped_in_order() {
    let query = Query::new().optional("A", Some("1")).optional::<&str>("B", None).optional("C", Some("3"));
    assert_eq!(query.encode().as_deref(), Some("A=1&C=3"));
  }

  #[test]
  fn test_single_value_has_no_separator() {
    let query = Query::new().optional::<&str>("country", None).optional("exchange", Some("NASDAQ"));
    assert_eq!(query.encode().as_deref(), Some("exchange=NASDAQ"));
  }

  #[test]
  fn test_dates_and_dashes_pass_through() {
    let query = Query::new().optional("from", Some("2024-01-01")).optional("frame", Some("daily"));
    assert_eq!(query.encode().as_deref(), Some("from=2024-01-01&frame=daily"));
  }

  #[test]
  fn test_free_text_is_percent_encoded() {
    let query = Query::new().require("query", "gdp & growth=up");
    assert_eq!(query.encode().as_deref(), Some("query=gdp+%26+growth%3Dup"));
  }

  #[test]
  fn test_runtime_keys() {
    let key = String::from("my key");
    let query = Query::new().require(key, "v");
    assert_eq!(query.encode().as_deref(), Some("my+key=v"));
  }

  #[test]
  fn test_zero_count_is_absent() {
    let query = Query::new().optional("limit", Some(0u32)).optional("periods", Some(4u32));
    assert_eq!(query.encode().as_deref(), Some("periods=4"));
  }

  #[test]
  fn test_zero_level_is_present() {
    let query = Query::new().optional("minImportance", Some(0u8));
    assert_eq!(query.encode().as_deref(), Some("minImportance=0"));
  }
}
