//! Chart retrieval: intraday/daily close series, live price, and
//! relative-range history.

pub(crate) mod api;
mod params;
pub(crate) mod wire;

pub use params::validate_range;

use chrono::{DateTime, Utc};

/// A validated chart response: metadata plus the raw close series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub meta: ChartMeta,
    /// Unix timestamps, one per data point.
    pub timestamps: Vec<i64>,
    /// Close prices aligned with `timestamps`; `None` where the provider
    /// reported a gap.
    pub closes: Vec<Option<f64>>,
}

/// Metadata attached to a chart response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartMeta {
    pub currency: Option<String>,
    pub symbol: Option<String>,
    pub regular_market_price: Option<f64>,
    pub timezone: Option<String>,
}

/// The most recent traded price and its currency.
#[derive(Debug, Clone, PartialEq)]
pub struct LivePrice {
    pub price: f64,
    pub currency: Option<String>,
}

/// A close-price time series over a relative range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalResult {
    /// Close prices in chronological order, gaps dropped.
    pub closes: Vec<f64>,
    pub currency: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
