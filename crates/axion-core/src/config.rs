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

//! Configuration management for the Axion client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Axion client
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Bearer credential. `None` means requests are sent unauthenticated.
  pub api_key: Option<String>,

  /// Default request timeout in seconds. `None` leaves requests unbounded.
  pub timeout_secs: Option<u64>,
}

impl Config {
  /// Load configuration from environment variables (and a `.env` file if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a config from an arbitrary key lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = lookup(crate::API_KEY_ENV).filter(|key| !key.trim().is_empty());

    let timeout_secs = match lookup(crate::TIMEOUT_ENV) {
      Some(raw) => Some(
        raw
          .trim()
          .parse::<u64>()
          .map_err(|_| Error::Config(format!("Invalid {}: {raw}", crate::TIMEOUT_ENV)))?,
      ),
      None => None,
    };

    Ok(Config { api_key, timeout_secs })
  }

  /// Create a config with the given key and no timeout
  pub fn default_with_key(api_key: String) -> Self {
    Config { api_key: Some(api_key), timeout_secs: None }
  }

  /// Config for unauthenticated requests
  pub fn anonymous() -> Self {
    Config::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_config_from_lookup() {
    let config =
      Config::from_lookup(lookup_from(&[("AXION_API_KEY", "test_key"), ("AXION_TIMEOUT_SECS", "15")]))
        .unwrap();
    assert_eq!(config.api_key.as_deref(), Some("test_key"));
    assert_eq!(config.timeout_secs, Some(15));
  }

  #[test]
  fn test_missing_key_is_anonymous() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, Config::anonymous());
  }

  #[test]
  fn test_blank_key_is_anonymous() {
    let config = Config::from_lookup(lookup_from(&[("AXION_API_KEY", "  ")])).unwrap();
    assert!(config.api_key.is_none());
  }

  #[test]
  fn test_invalid_timeout() {
    let result = Config::from_lookup(lookup_from(&[("AXION_TIMEOUT_SECS", "soon")]));
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("abc".to_string());
    assert_eq!(config.api_key.as_deref(), Some("abc"));
    assert!(config.timeout_secs.is_none());
  }
}
