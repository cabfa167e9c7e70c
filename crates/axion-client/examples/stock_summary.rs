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

//! Stock Summary Example
//!
//! Fetches a quote and prints a few well-known fields, then lists every
//! top-level field of the document.
//!
//! ```text
//! AXION_API_KEY=... cargo run -p axion-client --example stock_summary -- AAPL
//! ```

use axion_client::{AxionClient, Config};
use serde_json::Value;

fn print_stock_info(document: &Value) {
  println!("Stock Information:");
  if let Some(symbol) = document.get("symbol").and_then(Value::as_str) {
    println!("  Symbol: {}", symbol);
  }
  if let Some(name) = document.get("name").and_then(Value::as_str) {
    println!("  Name: {}", name);
  }
  if let Some(price) = document.get("price").and_then(Value::as_f64) {
    println!("  Price: ${:.2}", price);
  }
  if let Some(change) = document.get("change").and_then(Value::as_f64) {
    println!("  Change: ${:.2}", change);
  }
  if let Some(change_percent) = document.get("changePercent").and_then(Value::as_f64) {
    println!("  Change %: {:.2}%", change_percent);
  }
  println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let ticker = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
  let client = AxionClient::new(Config::from_env()?)?;

  let response = client.stocks().quote(&ticker).await;
  if let Some(message) = response.error_message() {
    eprintln!("Error: {}", message);
  } else if let Some(document) = response.document() {
    print_stock_info(document);

    if let Some(fields) = document.as_object() {
      println!("All fields in response:");
      for (key, value) in fields {
        match value {
          Value::String(s) => println!("  {}: {}", key, s),
          Value::Number(n) => println!("  {}: {}", key, n),
          Value::Bool(b) => println!("  {}: {}", key, b),
          _ => println!("  {}: [complex type]", key),
        }
      }
    }
  } else {
    println!("Empty response (HTTP {:?})", response.status());
  }

  client.close();
  Ok(())
}
