use crate::{
    chart::{self, ChartData, HistoricalResult, LivePrice},
    core::{FinClient, FinError},
    news::{FeedEntry, FeedParser, News},
    quote::{Quote, api as quote_api},
};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with a [`FinClient`] and a symbol, and provides
/// methods to fetch charts, the live price, historical closes, a quote, and
/// news. The symbol is immutable once constructed; identity is exact string
/// equality.
///
/// # Example
///
/// ```no_run
/// # use financelite::{FinClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FinClient::default();
/// let ticker = Ticker::new(&client, "AAPL");
///
/// let live = ticker.live().await?;
/// println!("AAPL last traded at {}", live.price);
///
/// let hist = ticker.history("3mo").await?;
/// println!("{} closes since {:?}", hist.closes.len(), hist.start);
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    client: FinClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &FinClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// The symbol this ticker was created with.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the chart for the given interval and relative range.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::DataRequest`] if `range` is malformed (checked
    /// before any request is issued) or if the provider reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn chart(&self, interval: &str, range: &str) -> Result<ChartData, FinError> {
        chart::api::fetch_chart(&self.client, &self.symbol, interval, range).await
    }

    /// Fetches the most recent traded price and its currency.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::DataRequest`] if the provider reports an error
    /// or the response carries no live price.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn live(&self) -> Result<LivePrice, FinError> {
        chart::api::fetch_live(&self.client, &self.symbol).await
    }

    /// Fetches the daily close series over a relative range such as `5d`,
    /// `3mo`, or `2y`.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::DataRequest`] if `range` is malformed (checked
    /// before any request is issued) or if the provider reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn history(&self, range: &str) -> Result<HistoricalResult, FinError> {
        chart::api::fetch_history(&self.client, &self.symbol, range).await
    }

    /// Fetches the quote for this symbol as a batch of one.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::DataRequest`] if the provider reports an error
    /// or the symbol is not recognized.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn quote(&self) -> Result<Quote, FinError> {
        let mut quotes =
            quote_api::fetch_quotes(&self.client, &[self.symbol.clone()], None, false).await?;
        // fetch_quotes guarantees exactly one entry per requested symbol.
        Ok(quotes.remove(0))
    }

    /// Fetches up to `count` news entries for this symbol through `parser`.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::NoNewsFound`] when the feed has no entries.
    pub async fn news<P: FeedParser>(
        &self,
        parser: &P,
        count: u32,
    ) -> Result<Vec<FeedEntry>, FinError> {
        News::new(&self.client)
            .fetch(parser, &self.symbol, count)
            .await
    }
}
