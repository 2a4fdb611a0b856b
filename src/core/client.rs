//! Public client surface + builder.

use crate::core::FinError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default desktop UA to avoid trivial bot blocking.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (symbol is appended).
const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Yahoo v7 quote API base (symbols are passed as a query parameter).
const DEFAULT_BASE_QUOTE: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Yahoo headline RSS feed base (region/lang/symbol are passed as query parameters).
const DEFAULT_BASE_NEWS: &str = "https://feeds.finance.yahoo.com/rss/2.0/headline";

/// A cheap, cloneable handle to the configured HTTP client and endpoint bases.
///
/// Every retrieval type in this crate ([`Ticker`](crate::Ticker),
/// [`Group`](crate::Group), [`News`](crate::News)) borrows a `FinClient` at
/// construction time. The client holds no per-request state: no cache, no
/// retry policy, no credentials. Each call it serves is a one-shot request.
#[derive(Debug, Clone)]
pub struct FinClient {
    http: Client,
    base_chart: Url,
    base_quote: Url,
    base_news: Url,
}

impl Default for FinClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FinClient {
    /// Create a new builder.
    pub fn builder() -> FinClientBuilder {
        FinClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FinClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_quote: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FinClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    ///
    /// The base must end with a trailing slash; ticker symbols are joined onto it.
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the quote API base (e.g., `https://query1.finance.yahoo.com/v7/finance/quote`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the news feed base (e.g., `https://feeds.finance.yahoo.com/rss/2.0/headline`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<FinClient, FinError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_quote = self.base_quote.unwrap_or(Url::parse(DEFAULT_BASE_QUOTE)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FinClient {
            http,
            base_chart,
            base_quote,
            base_news,
        })
    }
}
