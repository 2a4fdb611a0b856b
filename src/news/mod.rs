//! News feed retrieval.
//!
//! The provider serves headlines as an RSS feed. Feed transport and XML
//! parsing are delegated to a [`FeedParser`] collaborator; this module owns
//! URL construction and result validation only.

use std::future::Future;

use serde_json::{Map, Value};
use url::Url;

use crate::core::{FinClient, FinError};

/// A single parsed feed entry, passed through verbatim.
pub type FeedEntry = Map<String, Value>;

/// The outcome of retrieving and parsing a feed.
#[derive(Debug, Clone, Default)]
pub struct FeedResult {
    pub entries: Vec<FeedEntry>,
}

/// Retrieves a feed URL and parses it into entries.
///
/// Implementations own both the fetch and the RSS/Atom decoding; transport
/// failures should surface as [`FinError::Http`] or
/// [`FinError::DataRequest`] as appropriate.
pub trait FeedParser {
    fn parse(&self, url: &Url) -> impl Future<Output = Result<FeedResult, FinError>> + Send;
}

/// Retrieval façade for provider news headlines.
pub struct News {
    client: FinClient,
    region: String,
    lang: String,
}

impl News {
    /// Create a news façade with the default `US` region and `en-US` language.
    pub fn new(client: &FinClient) -> Self {
        Self {
            client: client.clone(),
            region: "US".to_string(),
            lang: "en-US".to_string(),
        }
    }

    /// Override the feed region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the feed language.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Fetch up to `count` news entries for `symbol` through `parser`.
    ///
    /// # Errors
    ///
    /// Returns [`FinError::NoNewsFound`] when the feed has no entries, or
    /// whatever error the parser surfaced.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, parser), err, fields(symbol = %symbol))
    )]
    pub async fn fetch<P: FeedParser>(
        &self,
        parser: &P,
        symbol: &str,
        count: u32,
    ) -> Result<Vec<FeedEntry>, FinError> {
        let mut url = self.client.base_news().clone();
        url.query_pairs_mut()
            .append_pair("region", &self.region)
            .append_pair("lang", &self.lang)
            .append_pair("s", symbol)
            .append_pair("count", &count.to_string());

        let feed = parser.parse(&url).await?;
        if feed.entries.is_empty() {
            return Err(FinError::NoNewsFound);
        }
        Ok(feed.entries)
    }
}
