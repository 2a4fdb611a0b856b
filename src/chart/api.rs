use crate::{
    chart::{ChartData, ChartMeta, HistoricalResult, LivePrice, params, wire},
    core::{FinClient, FinError, net},
};
use chrono::{DateTime, Utc};

pub(crate) async fn fetch_chart(
    client: &FinClient,
    symbol: &str,
    interval: &str,
    range: &str,
) -> Result<ChartData, FinError> {
    // Pre-flight: reject a malformed range before any network I/O.
    params::validate_range(range)?;

    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("interval", interval)
        .append_pair("range", range);

    let body = net::get_text(client, &url).await?;
    let envelope: wire::ChartEnvelope = serde_json::from_str(&body)?;

    let chart = envelope
        .chart
        .ok_or_else(|| FinError::DataRequest(format!("missing chart node for {symbol}")))?;

    // A provider-reported error invalidates the whole response; `result`
    // is not read past this point.
    if let Some(err) = chart.error {
        return Err(FinError::DataRequest(
            err.description
                .or(err.code)
                .unwrap_or_else(|| symbol.to_string()),
        ));
    }

    let result = chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(|| FinError::DataRequest(format!("empty chart result for {symbol}")))?;

    let meta = result.meta.map_or_else(ChartMeta::default, |m| ChartMeta {
        currency: m.currency,
        symbol: m.symbol,
        regular_market_price: m.regular_market_price,
        timezone: m.timezone,
    });

    let closes = result
        .indicators
        .and_then(|ind| ind.quote.into_iter().next())
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(ChartData {
        meta,
        timestamps: result.timestamp.unwrap_or_default(),
        closes,
    })
}

pub(crate) async fn fetch_live(client: &FinClient, symbol: &str) -> Result<LivePrice, FinError> {
    let chart = fetch_chart(client, symbol, "1d", "1d").await?;
    let price = chart
        .meta
        .regular_market_price
        .ok_or_else(|| FinError::DataRequest(format!("no live price for {symbol}")))?;
    Ok(LivePrice {
        price,
        currency: chart.meta.currency,
    })
}

pub(crate) async fn fetch_history(
    client: &FinClient,
    symbol: &str,
    range: &str,
) -> Result<HistoricalResult, FinError> {
    let chart = fetch_chart(client, symbol, "1d", range).await?;

    let start = chart
        .timestamps
        .first()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(*ts, 0));
    let end = chart
        .timestamps
        .last()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(*ts, 0));

    Ok(HistoricalResult {
        closes: chart.closes.into_iter().flatten().collect(),
        currency: chart.meta.currency,
        start,
        end,
    })
}
