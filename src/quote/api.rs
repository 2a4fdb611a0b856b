use crate::{
    core::{FinClient, FinError, net},
    fields,
    quote::{Quote, project, wire},
};

/// Fetch a batch of quotes for `symbols` from the v7 quote endpoint.
///
/// The response is validated before anything is returned:
/// 1. the result list must have exactly one entry per requested symbol
///    (the provider silently drops unrecognized symbols);
/// 2. the envelope must not carry a provider-reported error.
///
/// When `fields` is `Some`, each quote is projected down to (or stripped
/// of, with `exclude`) the given fields. The field list is validated once,
/// before any quote is touched.
pub(crate) async fn fetch_quotes(
    client: &FinClient,
    symbols: &[String],
    fields: Option<&[&str]>,
    exclude: bool,
) -> Result<Vec<Quote>, FinError> {
    if symbols.is_empty() {
        return Err(FinError::DataRequest("no tickers to quote".to_string()));
    }

    let mut url = client.base_quote().clone();
    url.query_pairs_mut()
        .append_pair("symbols", &symbols.join(","));

    let body = net::get_text(client, &url).await?;
    let envelope: wire::QuoteEnvelope = serde_json::from_str(&body)?;

    let resp = envelope
        .quote_response
        .ok_or_else(|| FinError::DataRequest("missing quoteResponse".to_string()))?;

    let quotes = resp.result.unwrap_or_default();
    if quotes.len() != symbols.len() {
        return Err(FinError::DataRequest("Invalid tickers".to_string()));
    }
    if let Some(err) = resp.error {
        return Err(FinError::DataRequest(err.message()));
    }

    let Some(fields) = fields else {
        return Ok(quotes);
    };

    // Validate the shared field list up front so an invalid field aborts
    // the batch before any quote is filtered.
    fields::ensure_accepted(fields)?;
    quotes
        .iter()
        .map(|q| project(q, fields, exclude))
        .collect()
}
