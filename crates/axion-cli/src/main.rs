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

use anyhow::Result;
use axion_client::AxionClient;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::debug;

mod commands;
use commands::{
  market::{PricesArgs, QuoteArgs, TickersArgs},
  news::NewsArgs,
  raw::GetArgs,
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "axion")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// API key, overriding AXION_API_KEY
  #[arg(long, global = true)]
  api_key: Option<String>,

  /// Request timeout in seconds, overriding AXION_TIMEOUT_SECS
  #[arg(long, global = true)]
  timeout: Option<u64>,

  /// Print JSON on a single line
  #[arg(long, global = true)]
  compact: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Latest quote for a ticker
  Quote(QuoteArgs),
  /// Price history for a ticker
  Prices(PricesArgs),
  /// List tickers of an asset class
  Tickers(TickersArgs),
  /// Market or company news
  News(NewsArgs),
  /// Call any endpoint by path
  Get(GetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so stdout stays pipeable JSON
  let log_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::load(cli.api_key, cli.timeout)?;
  debug!("Authenticated: {}", config.api_key.is_some());
  let client = AxionClient::new(config)?;

  let response = match cli.command {
    Commands::Quote(args) => commands::market::quote(&client, args).await,
    Commands::Prices(args) => commands::market::prices(&client, args).await,
    Commands::Tickers(args) => commands::market::tickers(&client, args).await,
    Commands::News(args) => commands::news::execute(&client, args).await,
    Commands::Get(args) => commands::raw::execute(&client, args).await,
  };

  let outcome = commands::report(response, cli.compact);
  client.close();
  outcome
}
