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

//! Endpoint catalog
//!
//! Each endpoint is one row in an `endpoints!` table: a method name, a path
//! template whose `{}` slots are filled verbatim from the leading arguments,
//! and the query parameters it forwards. The macro generates a thin async
//! method that formats the path, encodes the query and calls
//! [`Session::execute`](crate::session::Session::execute).

pub mod fundamentals;
pub mod markets;
pub mod news;
pub mod profiles;
pub mod reference;

/// Generate an endpoint group struct and its methods from a declarative table.
///
/// ```ignore
/// endpoints! {
///   /// Stock market endpoints
///   pub struct StocksEndpoints;
///
///   /// Price history for a ticker
///   fn prices(ticker) => "stocks/{}/prices",
///     optional { "from" => from: &str, "to" => to: &str, "frame" => frame: &str };
/// }
/// ```
macro_rules! endpoints {
  (
    $(#[$smeta:meta])*
    pub struct $name:ident;
    $(
      $(#[$meta:meta])*
      fn $method:ident($($seg:ident),*) => $path:literal
        $(, required { $($rkey:literal => $rparam:ident : $rty:ty),+ $(,)? })?
        $(, optional { $($okey:literal => $oparam:ident : $oty:ty),+ $(,)? })?
        ;
    )*
  ) => {
    $(#[$smeta])*
    #[derive(Debug, Clone)]
    pub struct $name {
      session: $crate::session::Session,
    }

    impl $name {
      /// Create a new endpoint group over `session`
      pub fn new(session: $crate::session::Session) -> Self {
        Self { session }
      }

      $(
        $(#[$meta])*
        #[::tracing::instrument(skip(self), level = "debug")]
        pub async fn $method(
          &self,
          $($seg: &str,)*
          $($($rparam: $rty,)+)?
          $($($oparam: Option<$oty>,)+)?
        ) -> $crate::response::ApiResponse {
          let path = format!($path $(, $seg)*);
          let query = $crate::query::Query::new()
            $($(.require($rkey, $rparam))+)?
            $($(.optional($okey, $oparam))+)?;
          self.session.execute(&path, query.encode().as_deref()).await
        }
      )*
    }
  };
}

pub(crate) use endpoints;
