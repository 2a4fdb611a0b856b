use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
pub(crate) struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    pub(crate) quote_response: Option<QuoteResponse>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteResponse {
    // Entries stay as raw JSON objects so projection can operate on
    // arbitrary provider fields.
    pub(crate) result: Option<Vec<Map<String, Value>>>,
    pub(crate) error: Option<ApiError>,
}

#[derive(Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl ApiError {
    pub(crate) fn message(&self) -> String {
        self.description
            .clone()
            .or_else(|| self.code.clone())
            .unwrap_or_else(|| "provider reported an error".to_string())
    }
}
