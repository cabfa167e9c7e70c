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

//! Core types shared by the axion-* crates: configuration, the error
//! taxonomy, and the fixed constants of the Axion HTTP API.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base host for the Axion API. Not configurable through the public surface.
pub const BASE_URL: &str = "https://api.axionquant.com";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("axion-rust-client/", env!("CARGO_PKG_VERSION"));

/// Message used when an error response carries no usable `message` field.
pub const UNKNOWN_HTTP_ERROR: &str = "An unknown HTTP error occurred.";

/// Message used when an error response body is not valid JSON.
pub const UNPARSEABLE_HTTP_ERROR: &str =
  "An unknown HTTP error occurred (failed to parse error response).";

/// Message used when a success response body is not valid JSON.
pub const MALFORMED_JSON: &str = "Failed to parse JSON response.";

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "AXION_API_KEY";

/// Environment variable holding an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "AXION_TIMEOUT_SECS";
