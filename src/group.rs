use crate::{
    core::{FinClient, FinError},
    quote::{Quote, api},
};

/// An ordered collection of ticker symbols quoted as one batch.
///
/// Insertion order is significant: it drives the comma-joined request list
/// and the response cardinality check. Duplicates are legal; the caller owns
/// their semantics. A `Group` is not meant to be shared across concurrent
/// mutators.
pub struct Group {
    client: FinClient,
    tickers: Vec<String>,
}

impl Group {
    /// Create an empty group.
    pub fn new(client: &FinClient) -> Self {
        Self {
            client: client.clone(),
            tickers: Vec::new(),
        }
    }

    /// Create a group pre-populated with `tickers`, in order.
    pub fn with_tickers<I, S>(client: &FinClient, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: client.clone(),
            tickers: tickers.into_iter().map(Into::into).collect(),
        }
    }

    /// The symbols currently in the group, in insertion order.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Append a ticker symbol.
    pub fn add_ticker(&mut self, ticker: impl Into<String>) {
        self.tickers.push(ticker.into());
    }

    /// Remove the first occurrence of `ticker`.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::TickerNotInGroup`] when the symbol is absent.
    pub fn remove_ticker(&mut self, ticker: &str) -> Result<(), FinError> {
        let pos = self
            .tickers
            .iter()
            .position(|t| t == ticker)
            .ok_or_else(|| FinError::TickerNotInGroup(ticker.to_string()))?;
        self.tickers.remove(pos);
        Ok(())
    }

    /// Fetch one quote per ticker in the group, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::DataRequest`] when the provider reports an error
    /// or returns a result list whose length does not match the group.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quotes(&self) -> Result<Vec<Quote>, FinError> {
        api::fetch_quotes(&self.client, &self.tickers, None, false).await
    }

    /// Fetch one quote per ticker, projected down to (or stripped of, with
    /// `exclude`) the given fields.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::InvalidField`] if any requested field is not an
    /// accepted quote field, before any quote is filtered; otherwise the
    /// same errors as [`quotes`](Self::quotes).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quotes_with_fields(
        &self,
        fields: &[&str],
        exclude: bool,
    ) -> Result<Vec<Quote>, FinError> {
        api::fetch_quotes(&self.client, &self.tickers, Some(fields), exclude).await
    }
}
